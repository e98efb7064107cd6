/*!
Configuration of canonicalisation.

Canonical forms do not depend on the configuration.
Rather, configuration determines what happens when a malformed line is read, and how work is divided when canonicalising in parallel.
*/

mod config_option;
pub use config_option::ConfigOption;

mod error_policy;
pub use error_policy::ErrorPolicy;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// What to do on reading a malformed line.
    pub error_policy: ConfigOption<ErrorPolicy>,

    /// The number of threads used to canonicalise lines, when canonicalising in parallel.
    pub workers: ConfigOption<usize>,

    /// The number of lines sent to a thread at a time, when canonicalising in parallel.
    pub batch_size: ConfigOption<usize>,
}

impl Default for Config {
    /// The default configuration aborts on the first malformed line, and canonicalises on a single thread.
    fn default() -> Self {
        Config {
            error_policy: ConfigOption {
                name: "error_policy",
                min: ErrorPolicy::MIN,
                max: ErrorPolicy::MAX,
                value: ErrorPolicy::Abort,
            },

            workers: ConfigOption {
                name: "workers",
                min: 1,
                max: 256,
                value: 1,
            },

            batch_size: ConfigOption {
                name: "batch_size",
                min: 1,
                max: 1 << 20,
                value: 4096,
            },
        }
    }
}
