
mod booking_test;
mod property_test;
mod review_test;
