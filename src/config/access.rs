use super::*;

impl HfcConfig {
    /// Get a typed value using `section.variable` notation.
    ///
    /// The section is everything before the last `.`, so section names may
    /// themselves contain dots.
    ///
    /// # Examples
    /// ```no_run
    /// # use hfc_cfg::HfcConfig;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let config = HfcConfig::from_file("settings.hfc")?;
    /// let host: String = config.get("Server.host")?;
    /// let port: u16 = config.get("Server.port")?;
    /// let debug: bool = config.get("Flags.debug")?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// Returns error if path doesn't exist or value can't be converted to type T.
    pub fn get<T>(&self, path: &str) -> Result<T, HfcError>
    where
        T: TryFrom<Value, Error = HfcError>
    {
        let value = self.get_value(path)?;
        T::try_from(value).map_err(|e| self.enhance_error_with_line_info(e, path))
    }

    /// Get an optional typed value - returns `None` if the variable doesn't exist.
    pub fn get_optional<T>(&self, path: &str) -> Result<Option<T>, HfcError>
    where
        T: TryFrom<Value, Error = HfcError>
    {
        match self.get_value(path) {
            Ok(value) => T::try_from(value)
                .map(Some)
                .map_err(|e| self.enhance_error_with_line_info(e, path)),
            Err(HfcError::LookupError { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a value with a fallback default.
    pub fn get_or<T>(&self, path: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = HfcError>
    {
        self.get(path).unwrap_or(default)
    }

    /// Get a raw `Value` from the configuration.
    pub fn get_value(&self, path: &str) -> Result<Value, HfcError> {
        let (section, variable) = helpers::split_path(path)?;
        self.value(section, variable).cloned()
    }

    /// Borrow the value of `variable` in the first section called `section`.
    pub fn value(&self, section: &str, variable: &str) -> Result<&Value, HfcError> {
        self.document
            .section(section)
            .ok_or_else(|| helpers::missing_section(section))?
            .get(variable)
            .ok_or_else(|| helpers::missing_variable(section, variable))
    }

    /// Check if a `section.variable` path exists.
    pub fn has(&self, path: &str) -> bool {
        self.get_value(path).is_ok()
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.document.section(section).is_some()
    }

    /// Names of all sections, in order, duplicates included.
    pub fn sections(&self) -> Vec<&str> {
        self.document.section_names()
    }

    /// All variable names of a section, in declaration order.
    pub fn get_keys(&self, section: &str) -> Result<Vec<String>, HfcError> {
        self.document
            .section(section)
            .map(|s| s.variables.keys().cloned().collect())
            .ok_or_else(|| helpers::missing_section(section))
    }

    /// Every section that declares `variable`, with its value there.
    pub fn find_variable(&self, variable: &str) -> Vec<(&str, &Value)> {
        self.document
            .sections
            .iter()
            .filter_map(|s| s.get(variable).map(|v| (s.name.as_str(), v)))
            .collect()
    }

    /// Attach the source line to conversion errors.
    fn enhance_error_with_line_info(&self, e: HfcError, path: &str) -> HfcError {
        let (message, hint, code) = match e {
            HfcError::TypeError { message, hint, code, .. } => (message, hint, code),
            other => return other,
        };
        let Ok((section, variable)) = helpers::split_path(path) else {
            return HfcError::TypeError { message, line: 0, hint, code };
        };

        let (line, snippet) = helpers::find_config_line(section, variable, &self.raw_content, &self.syntax);
        if line > 0 {
            HfcError::TypeError {
                message: format!("{} for `{}`\n  → {}", message, path, snippet),
                line,
                hint,
                code,
            }
        } else {
            HfcError::TypeError {
                message: format!("{} for `{}`", message, path),
                line: 0,
                hint,
                code,
            }
        }
    }
}
