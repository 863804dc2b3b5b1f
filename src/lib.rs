//! Balanced assignment of items to capacity-bounded containers.
//!
//! Given items with a weight and a value, and containers ("mules") with a
//! weight capacity, assign every item to a container so that no capacity
//! is exceeded and the spread (max minus min) of total value across
//! containers is as small as possible.
//!
//! Three solvers share one [`model`] and one [`objective`]:
//!
//! - **Exact**: exhaustive enumeration of all `M^N` assignments. Optimal,
//!   exponential.
//! - **Greedy**: items by descending value, each to the least-valued
//!   container that fits. One pass.
//! - **Hill climbing**: starts from greedy and applies first-improvement
//!   moves and swaps between the most- and least-valued containers.
//!
//! Every solver builds its own working containers from the instance's
//! templates and returns a [`SolveResult`](solution::SolveResult), so
//! solves are independent and may run concurrently.
//!
//! # Architecture
//!
//! [`instance`] builds inputs (random or fixed scenarios) and [`compare`]
//! runs several solvers side by side. Both sit outside the solvers, which
//! only ever see a validated [`Instance`](model::Instance).
//!
//! # Examples
//!
//! ```
//! use mule_balance::exact::ExactRunner;
//! use mule_balance::greedy::GreedyRunner;
//! use mule_balance::model::Instance;
//!
//! let instance = Instance::from_pairs(
//!     &[(10.0, 5.0), (15.0, 8.0), (12.0, 6.0), (8.0, 4.0)],
//!     &[30.0, 30.0],
//! ).unwrap();
//!
//! let exact = ExactRunner::run(&instance);
//! let greedy = GreedyRunner::run(&instance);
//! assert!(exact.spread <= greedy.spread);
//! ```

pub mod compare;
pub mod error;
pub mod exact;
pub mod greedy;
pub mod instance;
pub mod local;
pub mod model;
pub mod objective;
pub mod solution;
