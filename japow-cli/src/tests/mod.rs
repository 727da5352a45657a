//! Shared test harness modules for the Japow CLI.

use super::*;

mod helpers;
