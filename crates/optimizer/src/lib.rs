//! # bridgeday-optimizer
//!
//! Plans a year's leave days so that they join weekends and public holidays
//! into the longest possible stretches of time off.
//!
//! A *free* day is a weekend day or a holiday. A *bridge* is a short run of
//! working days between two free spans: booking leave on it turns the whole
//! stretch into one vacation.
//!
//! ## Pipeline
//!
//! ```text
//!  holidays + year
//!        │
//!        ▼
//!  ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!  │   day map    │──▶│ bridge search│──▶│ deduplicate  │──▶│   allocate   │──▶│  summarize   │
//!  │ (classify)   │   │ (per seed)   │   │ (efficiency) │   │ (budget)     │   │ (totals)     │
//!  └──────────────┘   └──────────────┘   └──────────────┘   └──────────────┘   └──────────────┘
//! ```
//!
//! Every stage is a pure function of its inputs. Independent plans can be
//! computed on as many threads as the caller likes.
//!
//! ## Quick Start
//!
//! ```
//! use bridgeday_holidays::{Region, holidays_for_region};
//! use bridgeday_optimizer::{
//!     OptimizerConfig, SelectionPolicy, materialize_calendar, optimize_leave_plan,
//! };
//!
//! let holidays = holidays_for_region(Region::Germany, 2025).unwrap();
//! let config = OptimizerConfig::new().with_policy(SelectionPolicy::PreferShortBreaks);
//!
//! let plan = optimize_leave_plan(2025, &holidays, 10, &config).unwrap();
//! assert!(plan.leave_days_used() <= 10);
//! println!("{}", plan.summary());
//!
//! let calendar = materialize_calendar(2025, &holidays, &plan).unwrap();
//! assert_eq!(calendar.len(), 365);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `day` | Per-day classification (`CalendarDay`) |
//! | `day_map` | Whole-year classification (`YearDayMap`) |
//! | `bridge` | Bridge opportunity search |
//! | `dedup` | Efficiency-first conflict removal |
//! | `policy` | Allocation order strategies |
//! | `allocate` | Greedy budgeted selection |
//! | `summary` | Totals and synopsis |
//! | `optimize` | End-to-end entry points |
//! | `config` | Optimizer configuration |
//! | `error` | Error types |

mod allocate;
mod bridge;
mod claims;
mod config;
mod day;
mod day_map;
mod dedup;
mod error;
mod opportunity;
mod optimize;
mod period;
mod policy;
mod summary;

pub use allocate::{Allocation, allocate};
pub use bridge::{DEFAULT_MAX_BRIDGE_DAYS, find_bridge_opportunities};
pub use config::{DEFAULT_MAX_CONSECUTIVE_DAYS, OptimizerConfig};
pub use day::CalendarDay;
pub use day_map::{YearDayMap, build_year_day_map};
pub use dedup::deduplicate_opportunities;
pub use error::OptimizerError;
pub use opportunity::BridgeOpportunity;
pub use optimize::{materialize_calendar, optimize_leave_plan};
pub use period::VacationPeriod;
pub use policy::{LONG_VACATION_MIN_DAYS, SHORT_BREAK_MAX_LEAVE_DAYS, SelectionPolicy};
pub use summary::{NO_OPPORTUNITIES_MESSAGE, OptimizationResult, summarize};
