//! End-to-end tests for the plugin setup planner: the four reference
//! scenarios (install/uninstall, with and without a plugin upgrader),
//! address forecasting, and applying the planned sets against the
//! in-memory permission manager.

use ethers::types::{Address, U256};

use dao_setup::types::{
    pct_to_ratio, DeployedAddress, InstallationParams, Operation, Permission,
    UninstallationParams, UninstallationPayload, VotingMode, VotingSettings,
};
use dao_setup::{
    encode_installation_params, encode_uninstallation_params, predict_create_address,
    InMemoryPermissionManager, PermissionCatalog, PermissionManager, PluginDeployer, PluginSetup,
    SetupError,
};

/// Deployer stub following the CREATE rule, so forecasts and "real"
/// deployments line up exactly like they would on a ledger.
struct CreateRuleDeployer {
    address: Address,
    nonce: u64,
}

impl CreateRuleDeployer {
    fn new(address: Address) -> Self {
        Self { address, nonce: 0 }
    }
}

impl PluginDeployer for CreateRuleDeployer {
    fn deployer_address(&self) -> Address {
        self.address
    }

    fn deployment_nonce(&self) -> u64 {
        self.nonce
    }

    fn deploy(
        &mut self,
        _dao: Address,
        _settings: &VotingSettings,
        _initial_editors: &[Address],
    ) -> Result<DeployedAddress, SetupError> {
        let deployed = predict_create_address(self.address, self.nonce).address();
        self.nonce += 1;
        Ok(DeployedAddress::new(deployed))
    }
}

fn dao() -> Address {
    Address::repeat_byte(0xd0)
}

fn alice() -> Address {
    Address::repeat_byte(0x0a)
}

fn bob() -> Address {
    Address::repeat_byte(0x0b)
}

fn install_data(plugin_upgrader: Option<Address>) -> Vec<u8> {
    encode_installation_params(&InstallationParams {
        voting_settings: VotingSettings {
            voting_mode: VotingMode::EarlyExecution,
            support_threshold: pct_to_ratio(25),
            min_participation: pct_to_ratio(50),
            min_duration: 60 * 60 * 24 * 5,
            min_proposer_voting_power: U256::zero(),
        },
        initial_editors: vec![alice()],
        plugin_upgrader,
    })
}

fn uninstall_payload(plugin: DeployedAddress, plugin_upgrader: Option<Address>) -> UninstallationPayload {
    UninstallationPayload {
        plugin,
        current_helpers: vec![],
        data: encode_uninstallation_params(&UninstallationParams { plugin_upgrader }),
    }
}

fn new_setup() -> PluginSetup {
    PluginSetup::new(CreateRuleDeployer::new(Address::repeat_byte(0x5e)))
}

#[test]
fn install_without_upgrader_grants_the_four_base_permissions() {
    let mut setup = new_setup();
    let (predicted, prepared) = setup.prepare_installation(dao(), &install_data(None)).unwrap();

    assert!(predicted.matches(&prepared.plugin));
    assert!(prepared.helpers.is_empty());
    assert_eq!(prepared.permissions.len(), 4);

    let catalog = setup.catalog();
    let plugin = prepared.plugin.address();
    let expected = [
        (dao(), plugin, catalog.id(Permission::Execute)),
        (plugin, dao(), catalog.id(Permission::UpdateVotingSettings)),
        (plugin, dao(), catalog.id(Permission::UpdateAddresses)),
        (plugin, dao(), catalog.id(Permission::UpgradePlugin)),
    ];
    for (op, (where_, who, id)) in prepared.permissions.iter().zip(expected) {
        assert_eq!(op.operation, Operation::Grant);
        assert_eq!(op.where_, where_);
        assert_eq!(op.who, who);
        assert_eq!(op.condition, None);
        assert_eq!(op.permission_id, id);
    }
}

#[test]
fn install_with_upgrader_appends_a_fifth_grant() {
    let mut setup = new_setup();
    let (predicted, prepared) = setup
        .prepare_installation(dao(), &install_data(Some(bob())))
        .unwrap();

    assert!(predicted.matches(&prepared.plugin));
    assert!(prepared.helpers.is_empty());
    assert_eq!(prepared.permissions.len(), 5);

    let catalog = PermissionCatalog::new();
    let last = prepared.permissions.last().unwrap();
    assert_eq!(last.operation, Operation::Grant);
    assert_eq!(last.where_, prepared.plugin.address());
    assert_eq!(last.who, bob());
    assert_eq!(last.condition, None);
    assert_eq!(last.permission_id, catalog.id(Permission::UpgradePlugin));
}

#[test]
fn uninstall_without_upgrader_revokes_the_four_base_permissions() {
    let setup = new_setup();
    let plugin = DeployedAddress::new(Address::repeat_byte(0x71));
    let prepared = setup
        .prepare_uninstallation(dao(), &uninstall_payload(plugin, None))
        .unwrap();

    assert_eq!(prepared.permissions.len(), 4);

    let catalog = PermissionCatalog::new();
    let expected = [
        (dao(), plugin.address(), catalog.id(Permission::Execute)),
        (plugin.address(), dao(), catalog.id(Permission::UpdateVotingSettings)),
        (plugin.address(), dao(), catalog.id(Permission::UpdateAddresses)),
        (plugin.address(), dao(), catalog.id(Permission::UpgradePlugin)),
    ];
    for (op, (where_, who, id)) in prepared.permissions.iter().zip(expected) {
        assert_eq!(op.operation, Operation::Revoke);
        assert_eq!(op.where_, where_);
        assert_eq!(op.who, who);
        assert_eq!(op.condition, None);
        assert_eq!(op.permission_id, id);
    }
}

#[test]
fn uninstall_with_upgrader_appends_a_fifth_revoke() {
    let setup = new_setup();
    let plugin = DeployedAddress::new(Address::repeat_byte(0x71));
    let prepared = setup
        .prepare_uninstallation(dao(), &uninstall_payload(plugin, Some(bob())))
        .unwrap();

    assert_eq!(prepared.permissions.len(), 5);

    let catalog = PermissionCatalog::new();
    let last = prepared.permissions.last().unwrap();
    assert_eq!(last.operation, Operation::Revoke);
    assert_eq!(last.where_, plugin.address());
    assert_eq!(last.who, bob());
    assert_eq!(last.permission_id, catalog.id(Permission::UpgradePlugin));
}

#[test]
fn planning_is_deterministic() {
    for upgrader in [None, Some(bob())] {
        let data = install_data(upgrader);
        let mut first = new_setup();
        let mut second = new_setup();
        assert_eq!(
            first.prepare_installation(dao(), &data).unwrap(),
            second.prepare_installation(dao(), &data).unwrap(),
        );
    }
}

#[test]
fn uninstall_inverts_install_field_for_field() {
    for upgrader in [None, Some(bob())] {
        let mut setup = new_setup();
        let (_, installed) = setup
            .prepare_installation(dao(), &install_data(upgrader))
            .unwrap();
        let uninstalled = setup
            .prepare_uninstallation(dao(), &uninstall_payload(installed.plugin, upgrader))
            .unwrap();

        assert_eq!(installed.permissions.len(), uninstalled.permissions.len());
        for (grant, revoke) in installed.permissions.iter().zip(&uninstalled.permissions) {
            assert_eq!(grant.operation.inverse(), revoke.operation);
            assert_eq!(grant.where_, revoke.where_);
            assert_eq!(grant.who, revoke.who);
            assert_eq!(grant.condition, revoke.condition);
            assert_eq!(grant.permission_id, revoke.permission_id);
        }
    }
}

#[test]
fn install_then_uninstall_leaves_an_empty_authorization_graph() -> anyhow::Result<()> {
    for upgrader in [None, Some(bob())] {
        let mut setup = new_setup();
        let mut manager = InMemoryPermissionManager::new();

        let (_, installed) = setup.prepare_installation(dao(), &install_data(upgrader))?;
        manager.apply(&installed.permissions)?;
        assert_eq!(manager.granted_count(), installed.permissions.len());

        let uninstalled =
            setup.prepare_uninstallation(dao(), &uninstall_payload(installed.plugin, upgrader))?;
        manager.apply(&uninstalled.permissions)?;
        assert!(manager.is_empty());
    }
    Ok(())
}

#[test]
fn prepared_installation_serializes_with_wire_field_names() -> anyhow::Result<()> {
    let mut setup = new_setup();
    let (_, prepared) = setup.prepare_installation(dao(), &install_data(Some(bob())))?;

    let json = serde_json::to_value(&prepared)?;
    assert_eq!(json["helpers"], serde_json::json!([]));
    assert_eq!(json["permissions"].as_array().map(Vec::len), Some(5));

    // Operations must go out under the on-wire name, not the Rust field.
    let first = &json["permissions"][0];
    assert!(first.get("where").is_some());
    assert!(first.get("where_").is_none());
    Ok(())
}

#[test]
fn successive_installs_land_on_successive_forecasts() {
    let mut setup = new_setup();

    let first_forecast = setup.predict_plugin_address();
    let (predicted, first) = setup.prepare_installation(dao(), &install_data(None)).unwrap();
    assert_eq!(first_forecast, predicted);
    assert!(predicted.matches(&first.plugin));

    // The nonce moved, so a fresh forecast must point somewhere new.
    let second_forecast = setup.predict_plugin_address();
    assert_ne!(first_forecast, second_forecast);
    let (_, second) = setup.prepare_installation(dao(), &install_data(None)).unwrap();
    assert!(second_forecast.matches(&second.plugin));
}

#[test]
fn malformed_payloads_fail_before_any_planning() {
    let mut setup = new_setup();
    assert!(setup.prepare_installation(dao(), &[0x00, 0x01]).is_err());

    let plugin = DeployedAddress::new(Address::repeat_byte(0x71));
    let payload = UninstallationPayload {
        plugin,
        current_helpers: vec![],
        data: vec![0xde, 0xad],
    };
    assert!(setup.prepare_uninstallation(dao(), &payload).is_err());
}
