//! # Operation Tables
//!
//! Typed operation enums for the four services, replacing string-keyed
//! global function tables.
//!
//! Each enum lists the functions a service serves, their wire names and
//! fixed arities. An [`OperationTable`] is built once per service at
//! startup; building fails if two operations share a wire name or a name
//! does not resolve back to its own operation.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use thiserror::Error;

/// Arity of the bootstrap `init(key, value)` call.
pub const INIT_ARITY: usize = 2;

/// A function served by one service.
pub trait Operation: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Every operation of the service.
    const ALL: &'static [Self];

    /// Wire name of the function.
    fn name(&self) -> &'static str;

    /// Fixed number of arguments.
    fn arity(&self) -> usize;
}

/// Startup validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperationTableError {
    /// Two operations share a wire name.
    #[error("duplicate operation name '{0}'")]
    DuplicateName(&'static str),

    /// An operation has an empty wire name.
    #[error("operation {0} has an empty name")]
    EmptyName(String),
}

/// Name-to-operation lookup for one service.
#[derive(Debug, Clone)]
pub struct OperationTable<Op: Operation> {
    by_name: HashMap<&'static str, Op>,
}

impl<Op: Operation> OperationTable<Op> {
    /// Build and validate the table from `Op::ALL`.
    pub fn build() -> Result<Self, OperationTableError> {
        let mut by_name = HashMap::with_capacity(Op::ALL.len());
        for op in Op::ALL {
            let name = op.name();
            if name.is_empty() {
                return Err(OperationTableError::EmptyName(format!("{op:?}")));
            }
            if by_name.insert(name, *op).is_some() {
                return Err(OperationTableError::DuplicateName(name));
            }
        }
        Ok(Self { by_name })
    }

    /// Resolve a wire name.
    #[must_use]
    pub fn resolve(&self, function: &str) -> Option<Op> {
        self.by_name.get(function).copied()
    }

    /// Number of registered operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// True when no operation is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Registered wire names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.by_name.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

macro_rules! operations {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => ($wire:literal, $arity:literal), )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl Operation for $name {
            const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];

            fn name(&self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )+
                }
            }

            fn arity(&self) -> usize {
                match self {
                    $( Self::$variant => $arity, )+
                }
            }
        }
    };
}

operations! {
    /// Inventory Ledger functions.
    pub enum InventoryOperation {
        /// circuitId, network, providerId, totalBandwidth
        CreateCircuit => ("createCircuit", 4),
        /// circuitId, amount
        Allocate => ("allocate", 2),
        /// circuitId
        CheckCapacity => ("checkCapacity", 1),
        /// circuitId
        QueryByCircuitId => ("queryByCircuitId", 1),
    }
}

operations! {
    /// Provisioning Ledger functions.
    pub enum ProvisioningOperation {
        /// orderId
        OpenOrder => ("openOrder", 1),
        /// orderId, circuitId, requestedBandwidth, operatorId
        Complete => ("complete", 4),
        /// orderId
        Get => ("get", 1),
    }
}

operations! {
    /// Process Orchestrator functions.
    pub enum OrchestratorOperation {
        /// orchestratorId, inventoryId, provisioningId, circuitId,
        /// requestedBandwidth, orderId, operatorId
        Admit => ("admit", 7),
    }
}

operations! {
    /// Order Coordinator functions.
    pub enum CoordinatorOperation {
        /// orchestratorId, inventoryId, provisioningId, orderId, operatorId,
        /// circuitId, requestedBandwidth
        Submit => ("submit", 7),
        /// provisioningId, orderId
        GetOrder => ("getOrder", 2),
    }
}
