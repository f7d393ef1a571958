use super::{DiagnosticCategory, DiagnosticMessage};

pub mod diagnostic_codes {
    pub const MISSING_THROWS_ANNOTATION: u32 = 1001;
    pub const UNUSED_THROWS_ANNOTATION: u32 = 1002;
    pub const USELESS_THROWS_ANNOTATION: u32 = 1003;
    pub const CHECKED_EXCEPTION_IN_GLOBAL_SCOPE: u32 = 1004;
    pub const CATCH_TYPE_ALREADY_CAUGHT_BY: u32 = 1101;
    pub const CATCH_TYPE_IS_REDUNDANT: u32 = 1102;
    pub const CATCH_IS_UNREACHABLE: u32 = 1103;
    pub const CATCH_TYPE_NEVER_THROWN_IN_TRY: u32 = 1104;
}

pub mod diagnostic_messages {
    pub const MISSING_THROWS_ANNOTATION: &str = "Missing @throws {0} annotation";
    pub const UNUSED_THROWS_ANNOTATION: &str = "Unused @throws {0} annotation";
    pub const USELESS_THROWS_ANNOTATION: &str = "Useless @throws {0} annotation";
    pub const CHECKED_EXCEPTION_IN_GLOBAL_SCOPE: &str =
        "Throwing checked exception {0} in global scope is prohibited";
    pub const CATCH_TYPE_ALREADY_CAUGHT_BY: &str = "{0} is already caught by {1}";
    pub const CATCH_TYPE_IS_REDUNDANT: &str = "{0} is redundant";
    pub const CATCH_IS_UNREACHABLE: &str =
        "{0} is unreachable, superclass {1} has already been caught";
    pub const CATCH_TYPE_NEVER_THROWN_IN_TRY: &str =
        "{0} is never thrown in the corresponding try block";
}

pub static DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    DiagnosticMessage {
        code: diagnostic_codes::MISSING_THROWS_ANNOTATION,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::MISSING_THROWS_ANNOTATION,
    },
    DiagnosticMessage {
        code: diagnostic_codes::UNUSED_THROWS_ANNOTATION,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::UNUSED_THROWS_ANNOTATION,
    },
    DiagnosticMessage {
        code: diagnostic_codes::USELESS_THROWS_ANNOTATION,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::USELESS_THROWS_ANNOTATION,
    },
    DiagnosticMessage {
        code: diagnostic_codes::CHECKED_EXCEPTION_IN_GLOBAL_SCOPE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::CHECKED_EXCEPTION_IN_GLOBAL_SCOPE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::CATCH_TYPE_ALREADY_CAUGHT_BY,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::CATCH_TYPE_ALREADY_CAUGHT_BY,
    },
    DiagnosticMessage {
        code: diagnostic_codes::CATCH_TYPE_IS_REDUNDANT,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::CATCH_TYPE_IS_REDUNDANT,
    },
    DiagnosticMessage {
        code: diagnostic_codes::CATCH_IS_UNREACHABLE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::CATCH_IS_UNREACHABLE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::CATCH_TYPE_NEVER_THROWN_IN_TRY,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::CATCH_TYPE_NEVER_THROWN_IN_TRY,
    },
];
