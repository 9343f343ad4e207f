
use chrono::Duration;
use entity::sea_orm_active_enums::FuturePaymentStatus;
use loanbook_test_utils::prelude::*;

use crate::server::{error::Error, service::loan::LoanService};
