#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![doc = include_str!("../README.md")]
#![allow(renamed_and_removed_lints)]
#![allow(unknown_lints)]
#![warn(missing_docs)]
#![warn(noop_method_call)]
#![warn(unreachable_pub)]
#![warn(clippy::all)]
#![deny(clippy::await_holding_lock)]
#![deny(clippy::cargo_common_metadata)]
#![deny(clippy::cast_lossless)]
#![deny(clippy::checked_conversions)]
#![warn(clippy::cognitive_complexity)]
#![deny(clippy::debug_assert_with_mut_call)]
#![deny(clippy::exhaustive_enums)]
#![deny(clippy::exhaustive_structs)]
#![deny(clippy::expl_impl_clone_on_copy)]
#![deny(clippy::fallible_impl_from)]
#![deny(clippy::implicit_clone)]
#![deny(clippy::large_stack_arrays)]
#![warn(clippy::manual_ok_or)]
#![deny(clippy::missing_docs_in_private_items)]
#![warn(clippy::needless_borrow)]
#![warn(clippy::needless_pass_by_value)]
#![warn(clippy::option_option)]
#![deny(clippy::print_stderr)]
#![deny(clippy::print_stdout)]
#![warn(clippy::rc_buffer)]
#![deny(clippy::ref_option_ref)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(clippy::trait_duplication_in_bounds)]
#![deny(clippy::unchecked_duration_subtraction)]
#![deny(clippy::unnecessary_wraps)]
#![warn(clippy::unseparated_literal_suffix)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::mod_module_files)]
#![allow(clippy::let_unit_value)] // This can reasonably be done for explicitness
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::needless_raw_string_hashes)] // complained-about code is fine, often best
#![allow(clippy::needless_lifetimes)]
#![warn(unsafe_op_in_unsafe_fn)]

mod adaptor;
mod algorithm;
mod err;
mod hash;
mod hashed;
mod raw;
mod sequence;
mod static_map;
mod view;

pub mod pipe;

// Export the slot storage of the hashed table only to the fuzzer.
// (This is not stable; you should not use it except for testing.)
#[cfg(feature = "slot-array")]
pub use hashed::slots::SlotArray;

pub use adaptor::{
    ChunkView, DropView, FlattenView, SliceView, TakeView, ThroughView, TransformView,
};
pub use algorithm::{copy_into, find_first_i, lfold};
pub use err::Error;
pub use hash::{crc32_hash, KeyHash, StaticHash, StaticHashable};
pub use hashed::{hashed, Bucket, Hashed, HashedBuilder, SlotIndex};
pub use raw::{raw, RawView};
pub use sequence::{Sequence, SequenceMut};
pub use static_map::{
    static_map, Config, EqualTo, KeyEqual, KeyedHash, MapConfig, PairConfig, StaticMap,
    StaticMapBuilder,
};
pub use view::{Extent, IndexMapping, Iter, View, ViewAdaptor, ViewMut};

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub(crate) mod test_utils {
    /// Install a tracing subscriber for the current test.
    ///
    /// Honors `RUST_LOG`, defaulting to `debug`. Safe to call from every
    /// test; only the first call installs anything.
    pub(crate) fn init_test_logging() {
        use tracing_subscriber::{fmt, EnvFilter};

        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
