//! Retirement analytics tests.
