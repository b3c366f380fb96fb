// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! In-process stand-in for a Redis connection.
//!
//! [`FakeConnection`] answers `GET` and `SET` from a local map so a [`RedisStore`]
//! can be exercised without a server. It can be switched into modes that simulate an
//! unreachable server or replies of the wrong shape.
//!
//! [`RedisStore`]: crate::RedisStore

use std::{collections::HashMap, sync::Arc};

use parking_lot::Mutex;
use redis::{Arg, Cmd, Pipeline, RedisError, RedisFuture, RedisResult, Value, aio::ConnectionLike};

/// How a [`FakeConnection`] answers commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FakeMode {
    /// Commands behave like a real server.
    #[default]
    Healthy,
    /// Every command fails with an I/O error.
    Unreachable,
    /// `GET` answers with an array instead of a string.
    Malformed,
}

#[derive(Debug, Default)]
struct State {
    data: HashMap<Vec<u8>, Vec<u8>>,
    mode: FakeMode,
    commands: Vec<Vec<String>>,
}

/// A cloneable fake Redis connection; clones share their data.
///
/// # Examples
///
/// ```
/// use tiercel_redis::{RedisStore, testing::FakeConnection};
/// use tiercel_store::Store;
///
/// # futures::executor::block_on(async {
/// let connection = FakeConnection::new();
/// let store = RedisStore::from_connection(connection.clone());
///
/// store.put("key", "value").await.unwrap();
/// assert!(connection.contains_key("key"));
/// # });
/// ```
#[derive(Debug, Clone, Default)]
pub struct FakeConnection {
    state: Arc<Mutex<State>>,
}

impl FakeConnection {
    /// Creates an empty, healthy connection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Changes how subsequent commands are answered.
    pub fn set_mode(&self, mode: FakeMode) {
        self.state.lock().mode = mode;
    }

    /// Stores raw bytes under `key`, as another client might.
    pub fn insert_raw(&self, key: &str, value: impl Into<Vec<u8>>) {
        self.state.lock().data.insert(key.as_bytes().to_vec(), value.into());
    }

    /// Returns `true` if the server side holds `key` (with any prefix included).
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.state.lock().data.contains_key(key.as_bytes())
    }

    /// Returns every command received so far, as lossy UTF-8 arguments.
    #[must_use]
    pub fn commands(&self) -> Vec<Vec<String>> {
        self.state.lock().commands.clone()
    }

    fn execute(&self, cmd: &Cmd) -> RedisResult<Value> {
        let args: Vec<Vec<u8>> = cmd
            .args_iter()
            .filter_map(|arg| match arg {
                Arg::Simple(bytes) => Some(bytes.to_vec()),
                Arg::Cursor => None,
            })
            .collect();

        let mut state = self.state.lock();
        state
            .commands
            .push(args.iter().map(|arg| String::from_utf8_lossy(arg).into_owned()).collect());

        if state.mode == FakeMode::Unreachable {
            return Err(RedisError::from(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            )));
        }

        match args.as_slice() {
            [name, key] if name.eq_ignore_ascii_case(b"GET") => {
                if state.mode == FakeMode::Malformed {
                    return Ok(Value::Array(vec![Value::Int(1), Value::Int(2)]));
                }
                Ok(state.data.get(key).map_or(Value::Nil, |value| Value::BulkString(value.clone())))
            }
            [name, key, value] if name.eq_ignore_ascii_case(b"SET") => {
                state.data.insert(key.clone(), value.clone());
                Ok(Value::Okay)
            }
            _ => Err(RedisError::from((redis::ErrorKind::ClientError, "unsupported command"))),
        }
    }
}

impl ConnectionLike for FakeConnection {
    fn req_packed_command<'a>(&'a mut self, cmd: &'a Cmd) -> RedisFuture<'a, Value> {
        let reply = self.execute(cmd);
        Box::pin(async move { reply })
    }

    fn req_packed_commands<'a>(
        &'a mut self,
        _cmd: &'a Pipeline,
        _offset: usize,
        _count: usize,
    ) -> RedisFuture<'a, Vec<Value>> {
        Box::pin(async {
            Err(RedisError::from((
                redis::ErrorKind::ClientError,
                "pipelines are not supported",
            )))
        })
    }

    fn get_db(&self) -> i64 {
        0
    }
}
