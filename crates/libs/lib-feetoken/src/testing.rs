//! In-memory host used by the unit tests.
//!
//! Accounts live in a `BTreeMap` so whole-state snapshots can be compared for equality.
//! Contracts are scripted in Rust instead of executed as bytecode; they may write state
//! during a "static" call so rollback can be observed.

use crate::abi::{IUniswapV2Router02, IERC20};
use crate::binder::binding_key;
use crate::constants::BINDER_ADDRESS;
use crate::genesis::Genesis;
use crate::state::{CallError, CallOutcome, ExecutionContext, SnapshotId, StateReader};
use alloy_primitives::{b256, Address, Bytes, B256, U256};
use alloy_sol_types::{SolCall, SolValue};
use std::collections::BTreeMap;
use std::rc::Rc;

const SCRATCH_SLOT: B256 =
    b256!("0x00000000000000000000000000000000000000000000000000000000deadbeef");

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Account {
    pub balance: U256,
    pub storage: BTreeMap<B256, B256>,
}

pub(crate) type Accounts = BTreeMap<Address, Account>;

#[derive(Debug, Clone)]
pub(crate) struct RecordedCall {
    pub caller: Address,
    pub target: Address,
    pub input: Bytes,
    pub gas_limit: u64,
}

type Pricing = Rc<dyn Fn(U256, &[Address]) -> Vec<U256>>;

#[derive(Clone)]
enum Behavior {
    Erc20,
    Router(Pricing),
    Reverting,
    Returning(Bytes),
}

/// A scripted contract.
#[derive(Clone)]
pub(crate) struct MockContract {
    behavior: Behavior,
    gas_cost: u64,
    writes_on_call: bool,
}

impl MockContract {
    fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            gas_cost: 2_600,
            writes_on_call: false,
        }
    }

    /// Token whose `balanceOf` reads the holder's zero-extended address slot.
    pub fn erc20() -> Self {
        Self::new(Behavior::Erc20)
    }

    /// Router whose `getAmountsIn` always answers `amounts`.
    pub fn router_quoting(amounts: Vec<U256>) -> Self {
        Self::new(Behavior::Router(Rc::new(move |_: U256, _: &[Address]| amounts.clone())))
    }

    /// Router pricing a single pair with Uniswap V2's `getAmountIn` (0.3% fee).
    pub fn router_with_reserves(reserve_in: U256, reserve_out: U256) -> Self {
        Self::new(Behavior::Router(Rc::new(move |amount_out: U256, _path: &[Address]| {
            let numerator = reserve_in * amount_out * U256::from(1000u64);
            let denominator = (reserve_out - amount_out) * U256::from(997u64);
            vec![numerator / denominator + U256::from(1u64), amount_out]
        })))
    }

    pub fn reverting() -> Self {
        Self::new(Behavior::Reverting)
    }

    pub fn returning(output: Bytes) -> Self {
        Self::new(Behavior::Returning(output))
    }

    pub fn with_gas_cost(mut self, gas_cost: u64) -> Self {
        self.gas_cost = gas_cost;
        self
    }

    /// Mutate storage and balances before answering (or reverting).
    pub fn writing_on_call(mut self) -> Self {
        self.writes_on_call = true;
        self
    }

    fn execute(
        &self,
        accounts: &mut Accounts,
        this: Address,
        caller: Address,
        input: &[u8],
    ) -> Result<Bytes, CallError> {
        if self.writes_on_call {
            let contract = accounts.entry(this).or_default();
            contract.storage.insert(SCRATCH_SLOT, caller.into_word());
            accounts.entry(caller).or_default().balance += U256::from(1u64);
        }

        match &self.behavior {
            Behavior::Erc20 => {
                let call = IERC20::balanceOfCall::abi_decode(input)
                    .map_err(|_| CallError::Reverted(Bytes::new()))?;
                let word = accounts
                    .get(&this)
                    .and_then(|a| a.storage.get(&call.owner.into_word()).copied())
                    .unwrap_or_default();
                Ok(U256::from_be_slice(word.as_slice()).abi_encode().into())
            }
            Behavior::Router(pricing) => {
                let call = IUniswapV2Router02::getAmountsInCall::abi_decode(input)
                    .map_err(|_| CallError::Reverted(Bytes::new()))?;
                Ok(pricing(call.amountOut, &call.path).abi_encode().into())
            }
            Behavior::Reverting => Err(CallError::Reverted(Bytes::from_static(b"nope"))),
            Behavior::Returning(output) => Ok(output.clone()),
        }
    }
}

/// Journaled in-memory state implementing both host capabilities.
#[derive(Default)]
pub(crate) struct MemoryState {
    accounts: Accounts,
    contracts: BTreeMap<Address, MockContract>,
    snapshots: Vec<Accounts>,
    calls: Vec<RecordedCall>,
}

impl MemoryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load balances and storage from a genesis allocation. Bytecode is not executed;
    /// deploy mocks for the addresses a test calls.
    pub fn from_genesis(genesis: &Genesis) -> Self {
        let mut state = Self::new();
        for (address, alloc) in &genesis.alloc {
            state.accounts.insert(
                *address,
                Account {
                    balance: alloc.balance,
                    storage: alloc.storage.clone().unwrap_or_default(),
                },
            );
        }
        state
    }

    pub fn deploy(&mut self, address: Address, contract: MockContract) {
        self.contracts.insert(address, contract);
    }

    pub fn set_storage(&mut self, address: Address, key: B256, value: B256) {
        self.accounts.entry(address).or_default().storage.insert(key, value);
    }

    /// Write a binding the way the binder contract does.
    pub fn bind(&mut self, account: Address, token: Address) {
        self.set_storage(BINDER_ADDRESS, binding_key(account), token.into_word());
    }

    /// Seed a balance for [`MockContract::erc20`].
    pub fn set_token_balance(&mut self, token: Address, holder: Address, amount: U256) {
        self.set_storage(token, holder.into_word(), B256::from(amount));
    }

    pub fn calls(&self) -> &[RecordedCall] {
        &self.calls
    }

    pub fn open_snapshots(&self) -> usize {
        self.snapshots.len()
    }

    /// Full copy of balances and storage, for before/after comparisons.
    pub fn fingerprint(&self) -> Accounts {
        self.accounts.clone()
    }
}

impl StateReader for MemoryState {
    fn read_slot(&self, address: Address, key: B256) -> B256 {
        self.accounts
            .get(&address)
            .and_then(|a| a.storage.get(&key).copied())
            .unwrap_or_default()
    }
}

impl ExecutionContext for MemoryState {
    fn snapshot(&mut self) -> SnapshotId {
        self.snapshots.push(self.accounts.clone());
        self.snapshots.len() - 1
    }

    fn revert_to_snapshot(&mut self, id: SnapshotId) {
        self.accounts = self.snapshots[id].clone();
        self.snapshots.truncate(id);
    }

    fn static_call(
        &mut self,
        caller: Address,
        target: Address,
        input: Bytes,
        gas_limit: u64,
    ) -> Result<CallOutcome, CallError> {
        self.calls.push(RecordedCall {
            caller,
            target,
            input: input.clone(),
            gas_limit,
        });

        let Some(contract) = self.contracts.get(&target).cloned() else {
            return Ok(CallOutcome {
                output: Bytes::new(),
                gas_used: 0,
            });
        };
        if contract.gas_cost > gas_limit {
            return Err(CallError::OutOfGas { gas_limit });
        }

        let output = contract.execute(&mut self.accounts, target, caller, &input)?;
        Ok(CallOutcome {
            output,
            gas_used: contract.gas_cost,
        })
    }
}
