//! Error types for the mstrace core library.
//!
//! Algorithmic outcomes such as a disconnected graph are reported as data in
//! [`crate::MstResult`]. The variants here cover contract violations only.

use std::fmt;

use thiserror::Error;

use crate::edge::EdgeId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error returned when an engine, reconciler, or plan receives input that
/// violates its contract.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// Two edges within one computation share an identifier.
    #[error("edge id {id} appears more than once in a single computation")]
    DuplicateEdgeId {
        /// The repeated edge identifier.
        id: EdgeId,
    },
    /// The visualisation cap must admit at least one edge.
    #[error("visualization cap must be at least 1 (got {got})")]
    InvalidVisualizationCap {
        /// The rejected cap supplied by the caller.
        got: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// Two edges within one computation share an identifier.
        DuplicateEdgeId => DuplicateEdgeId { .. } => "MST_DUPLICATE_EDGE_ID",
        /// The visualisation cap must admit at least one edge.
        InvalidVisualizationCap => InvalidVisualizationCap { .. } => "MST_INVALID_VISUALIZATION_CAP",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, MstError>;
