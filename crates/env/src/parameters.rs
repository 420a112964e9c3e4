use ssmenv_core::{Error, Result, SubstitutionParameters};

/// Parse `name=value` tokens into substitution parameters.
///
/// Each token is split on its first `=`, so values may contain `=` themselves.
/// `name=` defines an empty value. A token without `=` or with an empty name is
/// rejected. When a name repeats, the last token wins.
pub fn parse_parameters<I, S>(tokens: I) -> Result<SubstitutionParameters>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parameters = SubstitutionParameters::new();

    for token in tokens {
        let token = token.as_ref();
        let (name, value) = token
            .split_once('=')
            .ok_or_else(|| Error::invalid_parameter(token, "expected 'name=value'"))?;

        if name.is_empty() {
            return Err(Error::invalid_parameter(token, "parameter name is empty"));
        }

        if let Some(previous) = parameters.insert(name, value) {
            tracing::debug!(name = %name, previous = %previous, "Parameter overridden");
        }
    }

    Ok(parameters)
}
