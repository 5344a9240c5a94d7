/*
 * SPDX-FileCopyrightText: 2025 The partbfs contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! A fixed-size group of communicating workers supporting a rooted gather.
//!
//! A [world](Communicator::world) of `size` endpoints is created before the
//! workers are launched, and each worker takes ownership of one endpoint.
//! The only collective operation is [`gather`](Communicator::gather), which
//! consumes the endpoint, so it can be performed once per run.
//!
//! Contributions travel to the root over a [`crossbeam_channel`] shared by
//! all non-root endpoints; the root then releases each non-root endpoint
//! through a private acknowledgement channel, so no participant leaves the
//! gather before all of them have entered it.

use crate::errors::ConfigError;
use crate::partition::WorkerId;
use crossbeam_channel::{Receiver, Sender};
use thiserror::Error;

/// A gather could not be completed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatherError {
    /// Some non-root endpoint was dropped without contributing.
    #[error("The root received {received} contributions out of {expected}")]
    MissingContributions { received: usize, expected: usize },
    /// The root endpoint was dropped before completing the gather.
    #[error("Worker {rank} lost contact with the root")]
    RootUnreachable { rank: usize },
}

enum Endpoint<T> {
    Root {
        rx: Receiver<(usize, T)>,
        /// Acknowledgement channels, indexed by rank minus one.
        acks: Vec<Sender<()>>,
    },
    Leaf {
        tx: Sender<(usize, T)>,
        ack: Receiver<()>,
    },
}

/// One endpoint of a group of workers exchanging values of type `T`.
pub struct Communicator<T> {
    id: WorkerId,
    endpoint: Endpoint<T>,
}

impl<T: Send> Communicator<T> {
    /// Creates the endpoints of a group of `size` workers, in rank order.
    pub fn world(size: usize) -> Result<Vec<Self>, ConfigError> {
        if size == 0 {
            return Err(ConfigError::NoWorkers);
        }
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut acks = Vec::with_capacity(size - 1);
        let mut world = Vec::with_capacity(size);

        for rank in 1..size {
            let (ack_tx, ack_rx) = crossbeam_channel::bounded(1);
            acks.push(ack_tx);
            world.push(Communicator {
                id: WorkerId { rank, size },
                endpoint: Endpoint::Leaf {
                    tx: tx.clone(),
                    ack: ack_rx,
                },
            });
        }
        // The root must not hold a sender, or it would never notice that
        // all other endpoints are gone
        drop(tx);

        world.insert(
            0,
            Communicator {
                id: WorkerId {
                    rank: WorkerId::ROOT,
                    size,
                },
                endpoint: Endpoint::Root { rx, acks },
            },
        );
        Ok(world)
    }

    #[inline(always)]
    pub fn id(&self) -> WorkerId {
        self.id
    }

    #[inline(always)]
    pub fn rank(&self) -> usize {
        self.id.rank
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.id.size
    }

    #[inline(always)]
    pub fn is_root(&self) -> bool {
        self.id.is_root()
    }

    /// Gathers one value from each endpoint at the root.
    ///
    /// The root returns the values of all endpoints ordered by rank, whatever
    /// the order in which they arrived; the other endpoints return `None`.
    /// The call blocks until every endpoint of the group has called it.
    pub fn gather(self, data: T) -> Result<Option<Vec<T>>, GatherError> {
        let rank = self.id.rank;
        let size = self.id.size;
        match self.endpoint {
            Endpoint::Root { rx, acks } => {
                let mut slots: Vec<Option<T>> = (0..size).map(|_| None).collect();
                slots[rank] = Some(data);
                for received in 1..size {
                    let (from, value) =
                        rx.recv()
                            .map_err(|_| GatherError::MissingContributions {
                                received,
                                expected: size,
                            })?;
                    debug_assert!(slots[from].is_none(), "Rank {} sent twice", from);
                    log::trace!("Root received the contribution of rank {}", from);
                    slots[from] = Some(value);
                }
                for ack in acks {
                    // A worker that is gone does not need to be released
                    let _ = ack.send(());
                }
                let gathered: Vec<T> = slots.into_iter().flatten().collect();
                debug_assert_eq!(gathered.len(), size);
                Ok(Some(gathered))
            }
            Endpoint::Leaf { tx, ack } => {
                tx.send((rank, data))
                    .map_err(|_| GatherError::RootUnreachable { rank })?;
                drop(tx);
                ack.recv()
                    .map_err(|_| GatherError::RootUnreachable { rank })?;
                Ok(None)
            }
        }
    }
}
