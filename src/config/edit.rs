use super::*;
use crate::ast::Section;
use crate::error::SyntaxErrorKind;

/// Mutations address the first section with a matching name and change the
/// document in place.
impl HfcConfig {
    /// Append an empty section.
    pub fn add_section(&mut self, name: &str) -> Result<(), HfcError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(HfcError::syntax(SyntaxErrorKind::InvalidSectionName, "Section name is empty", 0));
        }
        self.document.sections.push(Section::new(name));
        self.mark_edited();
        Ok(())
    }

    /// Remove a section and hand it back.
    pub fn remove_section(&mut self, name: &str) -> Result<Section, HfcError> {
        let idx = self
            .document
            .sections
            .iter()
            .position(|s| s.name == name)
            .ok_or_else(|| helpers::missing_section(name))?;
        let removed = self.document.sections.remove(idx);
        self.mark_edited();
        Ok(removed)
    }

    pub fn rename_section(&mut self, name: &str, new_name: &str) -> Result<(), HfcError> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(HfcError::syntax(SyntaxErrorKind::InvalidSectionName, "Section name is empty", 0));
        }
        self.section_mut(name)?.name = new_name.to_string();
        self.mark_edited();
        Ok(())
    }

    /// Insert or replace a variable. Returns the previous value, if any.
    pub fn add_variable(&mut self, section: &str, name: &str, value: Value) -> Result<Option<Value>, HfcError> {
        let name = checked_variable_name(name)?;
        let previous = self.section_mut(section)?.variables.insert(name, value);
        self.mark_edited();
        Ok(previous)
    }

    /// Replace the value of an existing variable. Returns the old value.
    pub fn edit_variable(&mut self, section: &str, name: &str, value: Value) -> Result<Value, HfcError> {
        let slot = self
            .section_mut(section)?
            .variables
            .get_mut(name)
            .ok_or_else(|| helpers::missing_variable(section, name))?;
        let old = std::mem::replace(slot, value);
        self.mark_edited();
        Ok(old)
    }

    /// Remove a variable, keeping the order of the others.
    pub fn remove_variable(&mut self, section: &str, name: &str) -> Result<Value, HfcError> {
        let removed = self
            .section_mut(section)?
            .variables
            .shift_remove(name)
            .ok_or_else(|| helpers::missing_variable(section, name))?;
        self.mark_edited();
        Ok(removed)
    }

    /// Rename a variable in place; it keeps its position.
    pub fn rename_variable(&mut self, section: &str, name: &str, new_name: &str) -> Result<(), HfcError> {
        let new_name = checked_variable_name(new_name)?;
        let variables = &mut self.section_mut(section)?.variables;

        if new_name != name && variables.contains_key(&new_name) {
            return Err(HfcError::LookupError {
                message: format!("Variable '{}' already exists in section '{}'", new_name, section),
                hint: Some("Remove it first or pick another name".into()),
                code: Some(306),
            });
        }

        let (idx, _, value) = variables
            .shift_remove_full(name)
            .ok_or_else(|| helpers::missing_variable(section, name))?;
        variables.shift_insert(idx, new_name, value);
        self.mark_edited();
        Ok(())
    }

    // Source lines no longer describe the document once it changes.
    fn mark_edited(&mut self) {
        self.raw_content.clear();
    }

    fn section_mut(&mut self, name: &str) -> Result<&mut Section, HfcError> {
        self.document
            .section_mut(name)
            .ok_or_else(|| helpers::missing_section(name))
    }
}

fn checked_variable_name(name: &str) -> Result<String, HfcError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(HfcError::syntax(SyntaxErrorKind::InvalidVariableName, "Variable name is empty", 0));
    }
    Ok(name.to_string())
}
