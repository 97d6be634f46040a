//! Unit tests for SMS module

pub mod mock_sms_tests;
pub mod webline_tests;
