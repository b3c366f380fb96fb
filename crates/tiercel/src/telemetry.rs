// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Structured `cache.event` logging for tier interactions.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CacheOperation {
    Get,
    Put,
}

impl CacheOperation {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Get => "cache.get",
            Self::Put => "cache.put",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CacheActivity {
    Hit,
    Miss,
    Inserted,
    Error,
}

impl CacheActivity {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Hit => "cache.hit",
            Self::Miss => "cache.miss",
            Self::Inserted => "cache.inserted",
            Self::Error => "cache.error",
        }
    }
}

/// Emits one event for a single tier interaction.
pub(crate) fn record(cache_name: &'static str, tier: &'static str, operation: CacheOperation, activity: CacheActivity, duration: Duration) {
    let op = operation.as_str();
    let act = activity.as_str();
    let duration_ns = duration.as_nanos();

    // tracing needs a constant level per call site
    macro_rules! emit_event {
        ($level:ident) => {
            tracing::$level!(
                cache.name = cache_name,
                cache.tier = tier,
                cache.operation = op,
                cache.activity = act,
                cache.duration_ns = duration_ns,
                "cache.event"
            )
        };
    }

    match activity {
        CacheActivity::Hit | CacheActivity::Miss | CacheActivity::Inserted => emit_event!(debug),
        CacheActivity::Error => emit_event!(error),
    }
}
