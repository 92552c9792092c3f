#[path = "../test_utils.rs"]
mod test_utils;

mod booking_test;
mod company_test;
mod middleware_test;
