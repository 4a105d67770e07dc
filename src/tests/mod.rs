pub mod fakes;

mod pagination_tests;
