use config::{ClientConfig, OptionsSnapshot};

/// Layered configuration consulted during qualified-name resolution.
///
/// Rebuilt per call from immutable session state plus call-site arguments;
/// the resolver never mutates it and never reads global state directly.
#[derive(Debug, Clone)]
pub struct ResolutionContext {
    /// Per-call override, highest precedence.
    pub explicit_schema: Option<String>,
    /// Set when the client entry point is constructed.
    pub session_default_schema: Option<String>,
    /// Snapshot of the process-wide `enable_schema` flag.
    pub enable_schema: bool,
    /// Snapshot of the legacy `always_enable_schema` flag, lower precedence.
    pub always_enable_schema: bool,
    /// Whether schema support is enabled for the current project.
    pub schema_support: bool,
}

impl Default for ResolutionContext {
    fn default() -> Self {
        Self {
            explicit_schema: None,
            session_default_schema: None,
            enable_schema: false,
            always_enable_schema: false,
            schema_support: true,
        }
    }
}

impl ResolutionContext {
    /// Boundary adapter: merge the call-site schema override with the session
    /// default and a one-shot read of the process-wide flags.
    pub fn build(config: &ClientConfig, explicit_schema: Option<&str>) -> Self {
        let snapshot = OptionsSnapshot::read();

        Self {
            explicit_schema: explicit_schema.map(str::to_string),
            session_default_schema: config.schema.clone(),
            enable_schema: snapshot.enable_schema,
            always_enable_schema: snapshot.always_enable_schema,
            schema_support: config.schema_support,
        }
    }

    pub fn with_explicit_schema(mut self, schema: impl Into<String>) -> Self {
        self.explicit_schema = Some(schema.into());
        self
    }

    pub fn with_session_default_schema(mut self, schema: impl Into<String>) -> Self {
        self.session_default_schema = Some(schema.into());
        self
    }

    pub fn with_enable_schema(mut self, enable_schema: bool) -> Self {
        self.enable_schema = enable_schema;
        self
    }

    pub fn with_always_enable_schema(mut self, always_enable_schema: bool) -> Self {
        self.always_enable_schema = always_enable_schema;
        self
    }

    pub fn with_schema_support(mut self, schema_support: bool) -> Self {
        self.schema_support = schema_support;
        self
    }
}
