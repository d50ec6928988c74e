//! The closed set of message keys and the placeholder tags each one expects.

use crate::duration::TimeUnit;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// Declares [`MessageKey`] together with its lookup table.
///
/// Each entry is `Variant => "dotted.path"` optionally followed by the
/// ordered list of placeholder tags the message text is expected to carry.
macro_rules! message_keys {
    ($(
        $(#[$meta:meta])*
        $variant:ident => $path:literal $(, [$($tag:literal),+ $(,)?])?;
    )+) => {
        /// Identifier of a localizable message.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum MessageKey {
            $(
                $(#[$meta])*
                $variant,
            )+
        }

        impl MessageKey {
            const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Path of the message inside a locale file.
            #[must_use]
            pub const fn path(self) -> &'static str {
                match self {
                    $(Self::$variant => $path,)+
                }
            }

            /// Placeholder tags in replacement order.
            #[must_use]
            pub const fn tags(self) -> &'static [&'static str] {
                match self {
                    $(Self::$variant => &[$($($tag),+)?],)+
                }
            }
        }
    };
}

message_keys! {
    /// Player name is not registered.
    UnknownUser => "error.unregistered_user";
    /// Command needs a logged-in player.
    NotLoggedIn => "error.not_logged_in";
    /// Missing permission for a command.
    NoPermission => "error.no_permission";
    /// Generic failure shown to players.
    UnexpectedError => "error.unexpected_error";
    /// Registration limit per address reached.
    MaxRegisterExceeded => "error.max_registration", ["%reg_count", "%max_acc", "%reg_names"];
    /// Temporary ban after too many failed logins.
    TempbanMaxLogins => "error.tempban_max_logins";
    /// Kicked to make room for a VIP.
    KickForVip => "error.kick_for_vip";

    /// Successful login.
    LoginSuccess => "login.success";
    /// Wrong password supplied.
    WrongPassword => "login.wrong_password";
    /// Reminder to log in.
    LoginMessage => "login.login_request";
    /// Login took too long.
    LoginTimeoutError => "login.timeout_error";

    /// Server only admits registered players.
    MustRegisterMessage => "registration.reg_only";
    /// Reminder to register.
    RegisterMessage => "registration.register_request";
    /// Successful registration.
    RegisterSuccess => "registration.success";
    /// Name is already registered.
    NameAlreadyRegistered => "registration.name_taken";

    /// Password was changed.
    PasswordChanged => "password.change_password_success";
    /// Password confirmation does not match.
    PasswordMatchError => "password.match_error";
    /// Password length outside the allowed range.
    InvalidPasswordLength => "password.wrong_length";

    /// Session resumed without login.
    SessionReconnection => "session.valid_session";
    /// Session expired.
    SessionExpired => "session.invalid_session";

    /// Player name too short or too long.
    InvalidNameLength => "on_join_validation.name_length";
    /// Player name contains forbidden characters.
    InvalidNameCharacters => "on_join_validation.characters_in_name", ["%valid_chars"];
    /// A player with the same name is online.
    SameNickOnline => "on_join_validation.same_nick_online";

    /// Email address added.
    EmailAdded => "email.added";
    /// Email address changed.
    EmailChanged => "email.changed";
    /// Email address belongs to another account.
    EmailAlreadyUsedError => "email.already_used";
    /// Email can only be changed again after a delay.
    EmailCooldownError => "email.email_cooldown_error", ["%time"];

    /// How to solve the captcha.
    UsageCaptcha => "captcha.usage_captcha", ["%captcha_code"];
    /// Captcha answer was wrong.
    CaptchaWrongError => "captcha.wrong_captcha", ["%captcha_code"];
    /// Captcha solved.
    CaptchaSuccess => "captcha.valid_captcha";

    /// Number of accounts owned by the player.
    AccountsOwnedSelf => "misc.accounts_owned_self", ["%count"];
    /// Number of accounts owned by another player.
    AccountsOwnedOther => "misc.accounts_owned_other", ["%name", "%count"];
    /// Configuration reloaded.
    Reload => "misc.reload";
    /// Player logged out.
    Logout => "misc.logout";

    /// Singular label for seconds.
    Second => "time.second";
    /// Plural label for seconds.
    Seconds => "time.seconds";
    /// Singular label for minutes.
    Minute => "time.minute";
    /// Plural label for minutes.
    Minutes => "time.minutes";
    /// Singular label for hours.
    Hour => "time.hour";
    /// Plural label for hours.
    Hours => "time.hours";
    /// Singular label for days.
    Day => "time.day";
    /// Plural label for days.
    Days => "time.days";
}

static BY_PATH: Lazy<HashMap<&'static str, MessageKey>> =
    Lazy::new(|| MessageKey::ALL.iter().map(|key| (key.path(), *key)).collect());

impl MessageKey {
    /// Every key, in declaration order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        Self::ALL
    }

    /// Number of replacements the message expects.
    #[must_use]
    pub const fn arity(self) -> usize {
        self.tags().len()
    }

    /// Finds the key stored under `path`.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        BY_PATH.get(path).copied()
    }

    /// Key holding the label for `unit`.
    #[must_use]
    pub const fn for_time_unit(unit: TimeUnit, singular: bool) -> Self {
        match (unit, singular) {
            (TimeUnit::Seconds, true) => Self::Second,
            (TimeUnit::Seconds, false) => Self::Seconds,
            (TimeUnit::Minutes, true) => Self::Minute,
            (TimeUnit::Minutes, false) => Self::Minutes,
            (TimeUnit::Hours, true) => Self::Hour,
            (TimeUnit::Hours, false) => Self::Hours,
            (TimeUnit::Days, true) => Self::Day,
            (TimeUnit::Days, false) => Self::Days,
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
