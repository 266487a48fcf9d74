use ethers::types::Address;
use tracing::debug;

use dao_setup_types::{
    DeployedAddress, Operation, Permission, PermissionOperation, PredictedAddress,
    PreparedInstallation, PreparedUninstallation, UninstallationPayload, VotingSettings,
};

use crate::{
    decode_installation_params, decode_uninstallation_params, predict_create_address,
    PermissionCatalog, SetupError,
};

/// The deployment mechanism that actually creates plugin instances. The
/// planner only forecasts addresses; this seam returns the real one.
pub trait PluginDeployer {
    /// Account the contract creation is sent from.
    fn deployer_address(&self) -> Address;

    /// Number of contracts this deployer has created so far. Must be
    /// serialized per deployer, or forecasts made from it are invalid.
    fn deployment_nonce(&self) -> u64;

    fn deploy(
        &mut self,
        dao: Address,
        settings: &VotingSettings,
        initial_editors: &[Address],
    ) -> Result<DeployedAddress, SetupError>;
}

/// The ordered permission set wiring a plugin into a DAO.
///
/// Base entries come out in a fixed order; the optional upgrader entry, if
/// present, is always last. Install and uninstall share this skeleton, so
/// the two sets mirror each other by construction.
fn wiring_permissions(
    catalog: &PermissionCatalog,
    operation: Operation,
    dao: Address,
    plugin: Address,
    plugin_upgrader: Option<Address>,
) -> Vec<PermissionOperation> {
    let mut permissions = vec![
        // The plugin may execute actions through the DAO.
        PermissionOperation::new(operation, dao, plugin, catalog.id(Permission::Execute)),
        // The DAO may reconfigure, re-staff, and upgrade the plugin.
        PermissionOperation::new(
            operation,
            plugin,
            dao,
            catalog.id(Permission::UpdateVotingSettings),
        ),
        PermissionOperation::new(operation, plugin, dao, catalog.id(Permission::UpdateAddresses)),
        PermissionOperation::new(operation, plugin, dao, catalog.id(Permission::UpgradePlugin)),
    ];
    if let Some(upgrader) = plugin_upgrader {
        permissions.push(PermissionOperation::new(
            operation,
            plugin,
            upgrader,
            catalog.id(Permission::UpgradePlugin),
        ));
    }
    permissions
}

/// Grants wiring `plugin` into `dao`: 4 entries, or 5 when an upgrader is
/// delegated.
pub fn installation_permissions(
    catalog: &PermissionCatalog,
    dao: Address,
    plugin: Address,
    plugin_upgrader: Option<Address>,
) -> Vec<PermissionOperation> {
    wiring_permissions(catalog, Operation::Grant, dao, plugin, plugin_upgrader)
}

/// Revokes undoing [`installation_permissions`] for the same inputs.
pub fn uninstallation_permissions(
    catalog: &PermissionCatalog,
    dao: Address,
    plugin: Address,
    plugin_upgrader: Option<Address>,
) -> Vec<PermissionOperation> {
    wiring_permissions(catalog, Operation::Revoke, dao, plugin, plugin_upgrader)
}

/// Entry point pairing the pure planners with the deployment seam.
pub struct PluginSetup {
    catalog: PermissionCatalog,
    deployer: Box<dyn PluginDeployer>,
}

impl PluginSetup {
    pub fn new(deployer: impl PluginDeployer + 'static) -> Self {
        Self {
            catalog: PermissionCatalog::new(),
            deployer: Box::new(deployer),
        }
    }

    pub fn catalog(&self) -> &PermissionCatalog {
        &self.catalog
    }

    /// Forecast where the next [`prepare_installation`](Self::prepare_installation)
    /// will place the plugin. Valid only until the deployer's nonce moves.
    pub fn predict_plugin_address(&self) -> PredictedAddress {
        predict_create_address(
            self.deployer.deployer_address(),
            self.deployer.deployment_nonce(),
        )
    }

    /// Decode the installation payload, deploy the plugin, and plan the
    /// grants wiring it into `dao`.
    ///
    /// The returned forecast was taken before deployment; callers can check
    /// it against the deployed instance but must treat the
    /// [`PreparedInstallation`]'s address as the ground truth.
    pub fn prepare_installation(
        &mut self,
        dao: Address,
        data: &[u8],
    ) -> Result<(PredictedAddress, PreparedInstallation), SetupError> {
        let params = decode_installation_params(data)?;
        let predicted = self.predict_plugin_address();

        let plugin = self
            .deployer
            .deploy(dao, &params.voting_settings, &params.initial_editors)?;
        let permissions = installation_permissions(
            &self.catalog,
            dao,
            plugin.address(),
            params.plugin_upgrader,
        );
        debug!(
            %plugin,
            %predicted,
            permissions = permissions.len(),
            "prepared plugin installation"
        );

        Ok((
            predicted,
            PreparedInstallation {
                plugin,
                helpers: Vec::new(),
                permissions,
            },
        ))
    }

    /// Decode the uninstallation payload and plan the revokes undoing a
    /// previous installation of `payload.plugin` into `dao`.
    pub fn prepare_uninstallation(
        &self,
        dao: Address,
        payload: &UninstallationPayload,
    ) -> Result<PreparedUninstallation, SetupError> {
        let params = decode_uninstallation_params(&payload.data)?;
        let permissions = uninstallation_permissions(
            &self.catalog,
            dao,
            payload.plugin.address(),
            params.plugin_upgrader,
        );
        debug!(
            plugin = %payload.plugin,
            permissions = permissions.len(),
            "prepared plugin uninstallation"
        );

        Ok(PreparedUninstallation { permissions })
    }
}
