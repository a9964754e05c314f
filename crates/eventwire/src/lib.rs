//! Flat `key=value` payload codec for in-process event dispatch.
//!
//! `eventwire` is the dynamic half of a publish/subscribe event layer:
//! events whose shape changes often are raised as a compact textual payload
//! instead of a fixed struct. A payload is a single flat line of
//! `key=value` segments joined by `|`:
//!
//! ```text
//! type=Hit|dmg=25|at=1.00,2.00,0.00|crit=false
//! ```
//!
//! The producer side assembles payloads through [`PayloadBuilder`], a
//! chaining builder backed by a [`BufferPool`] so frequent dispatch does not
//! allocate a fresh buffer per event. The consumer side recovers fields
//! through [`ParsedPayload`], whose typed accessors fall back to
//! caller-supplied defaults instead of erroring: a malformed payload
//! degrades, it never aborts dispatch. [`PayloadChannel`] carries finished
//! payloads from producers to registered listeners.
//!
//! The format is deliberately flat and escape-free: no arrays, no nesting,
//! and a value containing `|` or `=` corrupts its payload. That limitation
//! is part of the format, chosen to keep assembly and parsing a single
//! linear pass.
//!
//! ```
//! use eventwire::{BufferPool, ParsedPayload, Vec3};
//!
//! let mut pool = BufferPool::default();
//! let payload = pool
//!     .builder()
//!     .add_str("type", "Hit")
//!     .add_int("dmg", 25)
//!     .add_vec3("at", Vec3::new(1.0, 2.0, 0.0))
//!     .build();
//! assert_eq!(payload, "type=Hit|dmg=25|at=1.00,2.00,0.00");
//!
//! let data = ParsedPayload::parse(&payload);
//! assert_eq!(data.get_str("type", ""), "Hit");
//! assert_eq!(data.get_int("dmg", 0), 25);
//! assert_eq!(data.get_vec3("at", Vec3::ZERO), Vec3::new(1.0, 2.0, 0.0));
//! ```
//!
//! Everything here is single-threaded by design: the pool and builders take
//! `&mut self` and perform no locking, and the channel holds listeners as
//! `Rc`. Callers that dispatch from several threads wrap a pool per thread
//! or add their own synchronization.

mod builder;
mod channel;
mod format;
mod options;
mod parser;
mod pool;
mod vector;


pub use builder::PayloadBuilder;
pub use channel::{PayloadChannel, PayloadListener};
pub use format::DEFAULT_DECIMALS;
pub use options::PoolOptions;
pub use parser::{Fields, ParsedPayload};
pub use pool::BufferPool;
pub use vector::{ParseVec3Error, Vec3};
