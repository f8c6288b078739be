use parking_lot::RwLock;
use strata_primitives::Environment;

use crate::contract::{LayerKind, ZIndexContract};
use crate::error::{Dimension, LayerError};
use crate::frame::SafeFrameShell;

/// Single source of truth for claimed z-index values and safe-frame
/// dimensions.
///
/// Registration happens at host bootstrap, so conflict detection is a
/// linear scan over the stored contracts at insertion time. The store is
/// append-only for the process lifetime; removal is not supported. The
/// interior lock makes registration safe from multiple threads, at no cost
/// to a single-threaded bootstrap caller.
#[derive(Debug, Default)]
pub struct LayerRegistry {
	state: RwLock<LayerState>,
}

#[derive(Debug, Default)]
struct LayerState {
	contracts: Vec<ZIndexContract>,
	shells: Vec<SafeFrameShell>,
}

impl LayerRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a stacking contract.
	///
	/// Fails without touching the store when the contract's z-index falls
	/// outside its own declared range, or when an existing contract
	/// already claims the same `(z_index, layer, environment)` tuple.
	pub fn add_contract(&self, contract: ZIndexContract) -> Result<(), LayerError> {
		if !contract.in_range() {
			tracing::warn!(
				id = %contract.id,
				z_index = contract.z_index,
				min = contract.rules.min_z_index,
				max = contract.rules.max_z_index,
				"layer contract rejected: z-index out of range"
			);
			return Err(LayerError::RangeViolation {
				id: contract.id,
				z_index: contract.z_index,
				min: contract.rules.min_z_index,
				max: contract.rules.max_z_index,
			});
		}

		let mut state = self.state.write();
		if let Some(existing) = state
			.contracts
			.iter()
			.find(|stored| stored.stacking_key() == contract.stacking_key())
		{
			tracing::warn!(
				id = %contract.id,
				existing = %existing.id,
				z_index = contract.z_index,
				layer = %contract.layer,
				environment = %contract.environment,
				"layer contract rejected: stacking tuple already claimed"
			);
			return Err(LayerError::ConflictViolation {
				id: contract.id,
				existing: existing.id.clone(),
				z_index: contract.z_index,
				layer: contract.layer,
				environment: contract.environment,
			});
		}

		tracing::debug!(
			id = %contract.id,
			z_index = contract.z_index,
			layer = %contract.layer,
			environment = %contract.environment,
			"layer contract registered"
		);
		state.contracts.push(contract);
		Ok(())
	}

	/// Registers a safe-frame shell.
	///
	/// Fails without touching the store when the shell's width or height
	/// falls outside its declared constraints.
	pub fn add_shell(&self, shell: SafeFrameShell) -> Result<(), LayerError> {
		let c = shell.constraints;
		let violation = if !(c.min_width..=c.max_width).contains(&shell.width) {
			Some((Dimension::Width, shell.width, c.min_width, c.max_width))
		} else if !(c.min_height..=c.max_height).contains(&shell.height) {
			Some((Dimension::Height, shell.height, c.min_height, c.max_height))
		} else {
			None
		};

		if let Some((dimension, value, min, max)) = violation {
			tracing::warn!(
				id = %shell.id,
				%dimension,
				value,
				min,
				max,
				"safe frame rejected: dimension out of constraints"
			);
			return Err(LayerError::DimensionViolation {
				id: shell.id,
				dimension,
				value,
				min,
				max,
			});
		}

		tracing::debug!(
			id = %shell.id,
			width = shell.width,
			height = shell.height,
			position = %shell.position,
			"safe frame registered"
		);
		self.state.write().shells.push(shell);
		Ok(())
	}

	/// Pure query: does `id` name a contract matching `z_index` at `layer`?
	///
	/// Returns `true` iff a contract with that id exists, its layer
	/// matches, the supplied z-index equals the stored claim, and the value
	/// sits inside the contract's own range. Unknown ids are `false`.
	pub fn validate_layout(&self, id: &str, z_index: i32, layer: LayerKind) -> bool {
		let state = self.state.read();
		state.contracts.iter().any(|contract| {
			contract.id.as_ref() == id
				&& contract.layer == layer
				&& contract.z_index == z_index
				&& contract.in_range()
		})
	}

	/// Looks up a contract by id.
	pub fn contract(&self, id: &str) -> Option<ZIndexContract> {
		let state = self.state.read();
		state
			.contracts
			.iter()
			.find(|contract| contract.id.as_ref() == id)
			.cloned()
	}

	/// Returns a defensive copy of every stored contract.
	pub fn contracts(&self) -> Vec<ZIndexContract> {
		self.state.read().contracts.clone()
	}

	/// Returns the stored contracts pinned to `environment`.
	pub fn contracts_for(&self, environment: Environment) -> Vec<ZIndexContract> {
		let state = self.state.read();
		state
			.contracts
			.iter()
			.filter(|contract| contract.environment == environment)
			.cloned()
			.collect()
	}

	/// Returns the first shell registered under `id`.
	pub fn safe_frame_for(&self, id: &str) -> Option<SafeFrameShell> {
		let state = self.state.read();
		state
			.shells
			.iter()
			.find(|shell| shell.id.as_ref() == id)
			.cloned()
	}

	/// Returns a defensive copy of every stored shell.
	pub fn shells(&self) -> Vec<SafeFrameShell> {
		self.state.read().shells.clone()
	}

	pub fn contract_count(&self) -> usize {
		self.state.read().contracts.len()
	}

	pub fn shell_count(&self) -> usize {
		self.state.read().shells.len()
	}
}

#[cfg(test)]
mod tests {
	use strata_primitives::Environment;

	use super::*;
	use crate::contract::ContractRules;
	use crate::frame::{FrameConstraints, FramePosition, FrameRules, Padding};

	fn contract(id: &str, z_index: i32, layer: LayerKind, environment: Environment) -> ZIndexContract {
		ZIndexContract {
			id: id.into(),
			z_index,
			layer,
			environment,
			conditions: Vec::new(),
			rules: ContractRules::range(0, 1000),
		}
	}

	fn shell(id: &str, width: u32, height: u32) -> SafeFrameShell {
		SafeFrameShell {
			id: id.into(),
			width,
			height,
			position: FramePosition::Center,
			z_index: 600,
			environment: Environment::Nextgen,
			padding: Padding::uniform(8),
			constraints: FrameConstraints {
				min_width: 100,
				max_width: 500,
				min_height: 100,
				max_height: 500,
			},
			rules: FrameRules::default(),
		}
	}

	// ── Contract registration ──

	#[test]
	fn valid_contract_is_registered_and_retrievable() {
		let registry = LayerRegistry::new();
		registry
			.add_contract(contract("nav", 500, LayerKind::Overlay, Environment::Nextgen))
			.unwrap();

		assert_eq!(registry.contract_count(), 1);
		let stored = registry.contract("nav").unwrap();
		assert_eq!(stored.z_index, 500);
		assert_eq!(registry.contracts().len(), 1);
	}

	#[test]
	fn out_of_range_contract_is_rejected_without_partial_insertion() {
		let registry = LayerRegistry::new();
		let mut bad = contract("popup", 1500, LayerKind::Modal, Environment::Legacy);
		bad.rules = ContractRules::range(0, 1000);

		let err = registry.add_contract(bad).unwrap_err();
		assert_eq!(
			err,
			LayerError::RangeViolation {
				id: "popup".into(),
				z_index: 1500,
				min: 0,
				max: 1000,
			}
		);
		assert_eq!(registry.contract_count(), 0);
	}

	#[test]
	fn range_bounds_are_inclusive() {
		let registry = LayerRegistry::new();
		let mut lo = contract("lo", 0, LayerKind::Content, Environment::Legacy);
		lo.rules = ContractRules::range(0, 10);
		let mut hi = contract("hi", 10, LayerKind::Content, Environment::Nextgen);
		hi.rules = ContractRules::range(0, 10);

		registry.add_contract(lo).unwrap();
		registry.add_contract(hi).unwrap();
		assert_eq!(registry.contract_count(), 2);
	}

	#[test]
	fn duplicate_stacking_tuple_is_rejected() {
		let registry = LayerRegistry::new();
		registry
			.add_contract(contract("nav", 500, LayerKind::Overlay, Environment::Nextgen))
			.unwrap();

		let err = registry
			.add_contract(contract("nav2", 500, LayerKind::Overlay, Environment::Nextgen))
			.unwrap_err();
		assert!(matches!(err, LayerError::ConflictViolation { ref existing, .. } if existing.as_ref() == "nav"));
		assert_eq!(registry.contract_count(), 1);
	}

	#[test]
	fn same_z_in_different_layer_or_environment_is_allowed() {
		let registry = LayerRegistry::new();
		registry
			.add_contract(contract("a", 500, LayerKind::Overlay, Environment::Nextgen))
			.unwrap();
		registry
			.add_contract(contract("b", 500, LayerKind::Modal, Environment::Nextgen))
			.unwrap();
		registry
			.add_contract(contract("c", 500, LayerKind::Overlay, Environment::Legacy))
			.unwrap();

		assert_eq!(registry.contract_count(), 3);
	}

	#[test]
	fn registering_the_same_contract_twice_conflicts() {
		let registry = LayerRegistry::new();
		let nav = contract("nav", 500, LayerKind::Overlay, Environment::Nextgen);
		registry.add_contract(nav.clone()).unwrap();

		assert!(registry.add_contract(nav).is_err());
		assert_eq!(registry.contracts().len(), 1);
	}

	// ── Layout validation ──

	#[test]
	fn validate_layout_truth_table() {
		let registry = LayerRegistry::new();
		registry
			.add_contract(contract("nav", 500, LayerKind::Overlay, Environment::Nextgen))
			.unwrap();

		assert!(registry.validate_layout("nav", 500, LayerKind::Overlay));
		// Wrong z-index.
		assert!(!registry.validate_layout("nav", 600, LayerKind::Overlay));
		// Wrong layer.
		assert!(!registry.validate_layout("nav", 500, LayerKind::Modal));
		// Unknown id.
		assert!(!registry.validate_layout("missing", 500, LayerKind::Overlay));
	}

	#[test]
	fn contracts_for_filters_by_environment() {
		let registry = LayerRegistry::new();
		registry
			.add_contract(contract("a", 100, LayerKind::Content, Environment::Legacy))
			.unwrap();
		registry
			.add_contract(contract("b", 200, LayerKind::Content, Environment::Nextgen))
			.unwrap();

		let legacy = registry.contracts_for(Environment::Legacy);
		assert_eq!(legacy.len(), 1);
		assert_eq!(legacy[0].id.as_ref(), "a");
	}

	#[test]
	fn returned_collections_are_defensive_copies() {
		let registry = LayerRegistry::new();
		registry
			.add_contract(contract("nav", 500, LayerKind::Overlay, Environment::Nextgen))
			.unwrap();

		let mut copy = registry.contracts();
		copy.clear();
		assert_eq!(registry.contract_count(), 1);
	}

	// ── Safe frames ──

	#[test]
	fn valid_shell_is_registered_and_found() {
		let registry = LayerRegistry::new();
		registry.add_shell(shell("modal1", 300, 200)).unwrap();

		let found = registry.safe_frame_for("modal1").unwrap();
		assert_eq!(found.width, 300);
		assert_eq!(found.height, 200);
		assert!(registry.safe_frame_for("missing").is_none());
	}

	#[test]
	fn undersized_shell_is_rejected() {
		let registry = LayerRegistry::new();
		let err = registry.add_shell(shell("modal1", 50, 200)).unwrap_err();

		assert_eq!(
			err,
			LayerError::DimensionViolation {
				id: "modal1".into(),
				dimension: Dimension::Width,
				value: 50,
				min: 100,
				max: 500,
			}
		);
		assert_eq!(registry.shell_count(), 0);
	}

	#[test]
	fn oversized_height_is_rejected() {
		let registry = LayerRegistry::new();
		let err = registry.add_shell(shell("modal1", 300, 900)).unwrap_err();

		assert!(matches!(
			err,
			LayerError::DimensionViolation {
				dimension: Dimension::Height,
				value: 900,
				..
			}
		));
	}

	#[test]
	fn first_matching_shell_wins_lookup() {
		let registry = LayerRegistry::new();
		registry.add_shell(shell("modal1", 300, 200)).unwrap();
		registry.add_shell(shell("modal1", 400, 400)).unwrap();

		assert_eq!(registry.safe_frame_for("modal1").unwrap().width, 300);
		assert_eq!(registry.shell_count(), 2);
	}

	// ── Model-checked stress ──

	/// Deterministic pseudo-random number generator for reproducible
	/// stress tests.
	struct Xorshift64(u64);

	impl Xorshift64 {
		fn next(&mut self) -> u64 {
			let mut x = self.0;
			x ^= x << 13;
			x ^= x >> 7;
			x ^= x << 17;
			self.0 = x;
			x
		}

		fn next_usize(&mut self, bound: usize) -> usize {
			(self.next() % bound as u64) as usize
		}
	}

	#[test]
	fn stress_registration_matches_reference_model() {
		const OPS: usize = 2_000;
		let registry = LayerRegistry::new();
		let mut model: Vec<ZIndexContract> = Vec::new();
		let mut rng = Xorshift64(0xDEAD_BEEF);

		let layers = [LayerKind::Background, LayerKind::Content, LayerKind::Overlay, LayerKind::Modal];
		let environments = [Environment::Legacy, Environment::Nextgen];

		for i in 0..OPS {
			let z_index = rng.next_usize(40) as i32;
			let layer = layers[rng.next_usize(layers.len())];
			let environment = environments[rng.next_usize(environments.len())];
			// A third of the candidates claim outside their own range.
			let rules = if rng.next_usize(3) == 0 {
				ContractRules::range(z_index + 1, z_index + 10)
			} else {
				ContractRules::range(0, 40)
			};

			let candidate = ZIndexContract {
				id: format!("c{i}").into(),
				z_index,
				layer,
				environment,
				conditions: Vec::new(),
				rules,
			};

			let expect_range = candidate.in_range();
			let expect_conflict = model
				.iter()
				.any(|stored| stored.stacking_key() == candidate.stacking_key());

			let real = registry.add_contract(candidate.clone());
			match (expect_range, expect_conflict) {
				(false, _) => {
					assert!(matches!(real, Err(LayerError::RangeViolation { .. })), "op {i}: expected range violation");
				}
				(true, true) => {
					assert!(matches!(real, Err(LayerError::ConflictViolation { .. })), "op {i}: expected conflict");
				}
				(true, false) => {
					assert!(real.is_ok(), "op {i}: expected acceptance");
					model.push(candidate);
				}
			}
		}

		assert_eq!(registry.contracts(), model, "final store mismatch");
	}
}
