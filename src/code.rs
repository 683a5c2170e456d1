//! Closed vocabulary of result codes carried in every response envelope.
//!
//! Codes are string tokens, not ordinals: new variants may be added anywhere
//! without changing the wire form of existing ones.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultCode {
    // success
    Ok,
    Created,
    Accepted,
    NoContent,

    // client
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    MethodNotAllowed,
    RequestTimeout,
    Conflict,
    Gone,
    PreconditionFailed,
    PayloadTooLarge,
    UnsupportedMediaType,
    UnprocessableEntity,
    ValidationError,
    TooManyRequests,

    // ownership / visibility
    NotOwner,
    NotPublic,

    // session
    InvalidCredentials,
    EmailAlreadyExists,
    InvalidToken,
    InvalidPassword,
    UserNotFound,
    TokenExpired,
    AccountLocked,

    // per-entity not found
    ProjectNotFound,
    AbilityNotFound,
    ProjectAbilityNotFound,
    TraitNotFound,
    ProjectTraitNotFound,
    CoreRuleNotFound,
    CreatureNotFound,
    CharacterNotFound,
    ItemNotFound,
    RegionNotFound,
    NationNotFound,
    OrganizationNotFound,
    EventNotFound,
    LoreNotFound,
    CharTraitMapNotFound,
    CharAbilityMapNotFound,
    CreatureTraitMapNotFound,
    CreatureAbilityMapNotFound,

    // server
    InternalServerError,
    NotImplemented,
    BadGateway,
    ServiceUnavailable,
    GatewayTimeout,

    /// Generic failure when no more specific code applies.
    Error,
}

impl ResultCode {
    pub const ALL: &'static [ResultCode] = &[
        ResultCode::Ok,
        ResultCode::Created,
        ResultCode::Accepted,
        ResultCode::NoContent,
        ResultCode::BadRequest,
        ResultCode::Unauthorized,
        ResultCode::Forbidden,
        ResultCode::NotFound,
        ResultCode::MethodNotAllowed,
        ResultCode::RequestTimeout,
        ResultCode::Conflict,
        ResultCode::Gone,
        ResultCode::PreconditionFailed,
        ResultCode::PayloadTooLarge,
        ResultCode::UnsupportedMediaType,
        ResultCode::UnprocessableEntity,
        ResultCode::ValidationError,
        ResultCode::TooManyRequests,
        ResultCode::NotOwner,
        ResultCode::NotPublic,
        ResultCode::InvalidCredentials,
        ResultCode::EmailAlreadyExists,
        ResultCode::InvalidToken,
        ResultCode::InvalidPassword,
        ResultCode::UserNotFound,
        ResultCode::TokenExpired,
        ResultCode::AccountLocked,
        ResultCode::ProjectNotFound,
        ResultCode::AbilityNotFound,
        ResultCode::ProjectAbilityNotFound,
        ResultCode::TraitNotFound,
        ResultCode::ProjectTraitNotFound,
        ResultCode::CoreRuleNotFound,
        ResultCode::CreatureNotFound,
        ResultCode::CharacterNotFound,
        ResultCode::ItemNotFound,
        ResultCode::RegionNotFound,
        ResultCode::NationNotFound,
        ResultCode::OrganizationNotFound,
        ResultCode::EventNotFound,
        ResultCode::LoreNotFound,
        ResultCode::CharTraitMapNotFound,
        ResultCode::CharAbilityMapNotFound,
        ResultCode::CreatureTraitMapNotFound,
        ResultCode::CreatureAbilityMapNotFound,
        ResultCode::InternalServerError,
        ResultCode::NotImplemented,
        ResultCode::BadGateway,
        ResultCode::ServiceUnavailable,
        ResultCode::GatewayTimeout,
        ResultCode::Error,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ResultCode::Ok => "OK",
            ResultCode::Created => "CREATED",
            ResultCode::Accepted => "ACCEPTED",
            ResultCode::NoContent => "NO_CONTENT",
            ResultCode::BadRequest => "BAD_REQUEST",
            ResultCode::Unauthorized => "UNAUTHORIZED",
            ResultCode::Forbidden => "FORBIDDEN",
            ResultCode::NotFound => "NOT_FOUND",
            ResultCode::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            ResultCode::RequestTimeout => "REQUEST_TIMEOUT",
            ResultCode::Conflict => "CONFLICT",
            ResultCode::Gone => "GONE",
            ResultCode::PreconditionFailed => "PRECONDITION_FAILED",
            ResultCode::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            ResultCode::UnsupportedMediaType => "UNSUPPORTED_MEDIA_TYPE",
            ResultCode::UnprocessableEntity => "UNPROCESSABLE_ENTITY",
            ResultCode::ValidationError => "VALIDATION_ERROR",
            ResultCode::TooManyRequests => "TOO_MANY_REQUESTS",
            ResultCode::NotOwner => "NOT_OWNER",
            ResultCode::NotPublic => "NOT_PUBLIC",
            ResultCode::InvalidCredentials => "INVALID_CREDENTIALS",
            ResultCode::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            ResultCode::InvalidToken => "INVALID_TOKEN",
            ResultCode::InvalidPassword => "INVALID_PASSWORD",
            ResultCode::UserNotFound => "USER_NOT_FOUND",
            ResultCode::TokenExpired => "TOKEN_EXPIRED",
            ResultCode::AccountLocked => "ACCOUNT_LOCKED",
            ResultCode::ProjectNotFound => "PROJECT_NOT_FOUND",
            ResultCode::AbilityNotFound => "ABILITY_NOT_FOUND",
            ResultCode::ProjectAbilityNotFound => "PROJECT_ABILITY_NOT_FOUND",
            ResultCode::TraitNotFound => "TRAIT_NOT_FOUND",
            ResultCode::ProjectTraitNotFound => "PROJECT_TRAIT_NOT_FOUND",
            ResultCode::CoreRuleNotFound => "CORE_RULE_NOT_FOUND",
            ResultCode::CreatureNotFound => "CREATURE_NOT_FOUND",
            ResultCode::CharacterNotFound => "CHARACTER_NOT_FOUND",
            ResultCode::ItemNotFound => "ITEM_NOT_FOUND",
            ResultCode::RegionNotFound => "REGION_NOT_FOUND",
            ResultCode::NationNotFound => "NATION_NOT_FOUND",
            ResultCode::OrganizationNotFound => "ORGANIZATION_NOT_FOUND",
            ResultCode::EventNotFound => "EVENT_NOT_FOUND",
            ResultCode::LoreNotFound => "LORE_NOT_FOUND",
            ResultCode::CharTraitMapNotFound => "CHAR_TRAIT_MAP_NOT_FOUND",
            ResultCode::CharAbilityMapNotFound => "CHAR_ABILITY_MAP_NOT_FOUND",
            ResultCode::CreatureTraitMapNotFound => "CREATURE_TRAIT_MAP_NOT_FOUND",
            ResultCode::CreatureAbilityMapNotFound => "CREATURE_ABILITY_MAP_NOT_FOUND",
            ResultCode::InternalServerError => "INTERNAL_SERVER_ERROR",
            ResultCode::NotImplemented => "NOT_IMPLEMENTED",
            ResultCode::BadGateway => "BAD_GATEWAY",
            ResultCode::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            ResultCode::GatewayTimeout => "GATEWAY_TIMEOUT",
            ResultCode::Error => "ERROR",
        }
    }

    /// True only for OK, CREATED, ACCEPTED and NO_CONTENT.
    pub fn is_success(self) -> bool {
        matches!(
            self,
            ResultCode::Ok | ResultCode::Created | ResultCode::Accepted | ResultCode::NoContent
        )
    }

    /// Body-level code for a conventional HTTP status raised by the framework
    /// (unmatched route, extractor rejection, body limit). Unknown statuses map to ERROR.
    pub fn from_status(status: StatusCode) -> ResultCode {
        match status.as_u16() {
            200 => ResultCode::Ok,
            201 => ResultCode::Created,
            202 => ResultCode::Accepted,
            204 => ResultCode::NoContent,
            400 => ResultCode::BadRequest,
            401 => ResultCode::Unauthorized,
            403 => ResultCode::Forbidden,
            404 => ResultCode::NotFound,
            405 => ResultCode::MethodNotAllowed,
            408 => ResultCode::RequestTimeout,
            409 => ResultCode::Conflict,
            410 => ResultCode::Gone,
            412 => ResultCode::PreconditionFailed,
            413 => ResultCode::PayloadTooLarge,
            415 => ResultCode::UnsupportedMediaType,
            422 => ResultCode::ValidationError,
            429 => ResultCode::TooManyRequests,
            500 => ResultCode::InternalServerError,
            501 => ResultCode::NotImplemented,
            502 => ResultCode::BadGateway,
            503 => ResultCode::ServiceUnavailable,
            504 => ResultCode::GatewayTimeout,
            _ => ResultCode::Error,
        }
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown result code: {0}")]
pub struct UnknownResultCode(pub String);

impl FromStr for ResultCode {
    type Err = UnknownResultCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResultCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| UnknownResultCode(s.to_string()))
    }
}
