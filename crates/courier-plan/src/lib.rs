//! `courier-plan` — turn-by-turn delivery plan generation.
//!
//! # Crate layout
//!
//! | Module        | Contents                                             |
//! |---------------|------------------------------------------------------|
//! | [`planner`]   | `DeliveryPlanner`, `DeliveryPlan`                    |
//! | [`command`]   | `DeliveryCommand`                                    |
//! | [`direction`] | Bearings, `CompassDirection`, `TurnDirection`        |
//! | [`error`]     | `PlanError`, `PlanResult<T>`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.        |

pub mod command;
pub mod direction;
pub mod error;
pub mod planner;


pub use command::DeliveryCommand;
pub use direction::{CompassDirection, TurnDirection};
pub use error::{PlanError, PlanResult};
pub use planner::{DeliveryPlan, DeliveryPlanner};
