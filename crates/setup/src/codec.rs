use ethers::abi::{self, ParamType, Token};
use ethers::types::{Address, U256};

use dao_setup_types::{InstallationParams, UninstallationParams, VotingMode, VotingSettings};

use crate::SetupError;

// On-wire layout of the installation payload:
// (tuple(uint8,uint32,uint32,uint64,uint256), address[], address)
fn installation_param_types() -> [ParamType; 3] {
    [
        ParamType::Tuple(vec![
            ParamType::Uint(8),
            ParamType::Uint(32),
            ParamType::Uint(32),
            ParamType::Uint(64),
            ParamType::Uint(256),
        ]),
        ParamType::Array(Box::new(ParamType::Address)),
        ParamType::Address,
    ]
}

/// Decode the opaque installation payload into typed parameters.
///
/// The zero address in the upgrader slot means the optional upgrader is
/// disabled and decodes to `None`.
pub fn decode_installation_params(data: &[u8]) -> Result<InstallationParams, SetupError> {
    let mut tokens = abi::decode(&installation_param_types(), data)?.into_iter();

    let settings = match tokens.next() {
        Some(Token::Tuple(fields)) => decode_voting_settings(fields)?,
        other => return Err(malformed("voting settings", other)),
    };
    let initial_editors = match tokens.next() {
        Some(Token::Array(entries)) => entries
            .into_iter()
            .map(|entry| match entry {
                Token::Address(address) => Ok(address),
                other => Err(malformed("initial editor", Some(other))),
            })
            .collect::<Result<Vec<_>, _>>()?,
        other => return Err(malformed("initial editors", other)),
    };
    let plugin_upgrader = match tokens.next() {
        Some(Token::Address(address)) => optional_actor(address),
        other => return Err(malformed("plugin upgrader", other)),
    };

    Ok(InstallationParams {
        voting_settings: settings,
        initial_editors,
        plugin_upgrader,
    })
}

/// Encode typed installation parameters into the opaque payload. A `None`
/// upgrader goes on the wire as the zero address.
pub fn encode_installation_params(params: &InstallationParams) -> Vec<u8> {
    abi::encode(&[
        Token::Tuple(vec![
            Token::Uint(U256::from(params.voting_settings.voting_mode as u8)),
            Token::Uint(U256::from(params.voting_settings.support_threshold)),
            Token::Uint(U256::from(params.voting_settings.min_participation)),
            Token::Uint(U256::from(params.voting_settings.min_duration)),
            Token::Uint(params.voting_settings.min_proposer_voting_power),
        ]),
        Token::Array(
            params
                .initial_editors
                .iter()
                .map(|address| Token::Address(*address))
                .collect(),
        ),
        Token::Address(params.plugin_upgrader.unwrap_or_else(Address::zero)),
    ])
}

/// Decode the opaque uninstallation payload: a single upgrader slot.
pub fn decode_uninstallation_params(data: &[u8]) -> Result<UninstallationParams, SetupError> {
    let mut tokens = abi::decode(&[ParamType::Address], data)?.into_iter();
    let plugin_upgrader = match tokens.next() {
        Some(Token::Address(address)) => optional_actor(address),
        other => return Err(malformed("plugin upgrader", other)),
    };
    Ok(UninstallationParams { plugin_upgrader })
}

pub fn encode_uninstallation_params(params: &UninstallationParams) -> Vec<u8> {
    abi::encode(&[Token::Address(
        params.plugin_upgrader.unwrap_or_else(Address::zero),
    )])
}

fn decode_voting_settings(fields: Vec<Token>) -> Result<VotingSettings, SetupError> {
    if fields.len() != 5 {
        return Err(SetupError::MalformedPayload(format!(
            "voting settings: expected 5 fields, got {}",
            fields.len()
        )));
    }
    let mut fields = fields.into_iter();

    let mode_raw: u8 = uint_field(fields.next(), "voting mode")?;
    let voting_mode = VotingMode::try_from(mode_raw)
        .map_err(|err| SetupError::MalformedPayload(err.to_string()))?;

    Ok(VotingSettings {
        voting_mode,
        support_threshold: uint_field(fields.next(), "support threshold")?,
        min_participation: uint_field(fields.next(), "min participation")?,
        min_duration: uint_field(fields.next(), "min duration")?,
        min_proposer_voting_power: match fields.next() {
            Some(Token::Uint(value)) => value,
            other => return Err(malformed("min proposer voting power", other)),
        },
    })
}

fn uint_field<T: TryFrom<U256>>(token: Option<Token>, field: &str) -> Result<T, SetupError> {
    match token {
        Some(Token::Uint(value)) => T::try_from(value)
            .map_err(|_| SetupError::MalformedPayload(format!("{field}: value out of range"))),
        other => Err(malformed(field, other)),
    }
}

fn optional_actor(address: Address) -> Option<Address> {
    (!address.is_zero()).then_some(address)
}

fn malformed(field: &str, token: Option<Token>) -> SetupError {
    SetupError::MalformedPayload(match token {
        Some(token) => format!("{field}: unexpected token {token:?}"),
        None => format!("{field}: missing"),
    })
}
