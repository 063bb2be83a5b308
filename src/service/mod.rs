//! # Scheduling Service
//!
//! The request/response contract offered to the surrounding application.
//!
//! | Type | Role |
//! |------|------|
//! | [`ScheduleRequest`] | Tasks to order (`title`, `estimatedHours`, `dueDate`, `dependencies`) |
//! | [`ScheduleResponse`] | `recommendedOrder` plus a status `message` |
//! | [`SmartScheduler`] | Produces a response for any request, never an error |

mod dto;
mod smart;

pub use dto::{success_message, ScheduleRequest, ScheduleResponse, ValidationError, CYCLE_MESSAGE};
pub use smart::SmartScheduler;
