/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information when diagnosing an unexpected canonical form.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [canonicalisation of a line](crate::procedures::canonicalize)
    pub const CANONICAL: &str = "canonical";

    /// Logs related to [canonicalisation of a proof](crate::procedures::proof)
    pub const PROOF: &str = "proof";

    /// Logs related to [parallel canonicalisation](crate::procedures::parallel)
    pub const PARALLEL: &str = "parallel";

    /// Logs related to [reading proofs](crate::io)
    pub const IO: &str = "io";

    /// Logs related to [configuration](crate::config)
    pub const CONFIG: &str = "config";
}
