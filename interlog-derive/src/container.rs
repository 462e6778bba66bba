//! Container-level attribute parsing for `#[derive(LogState)]`.

use syn::{Attribute, LitStr, Meta, Result};

/// Options parsed from container-level `#[log_state(...)]` attributes.
#[derive(Clone, Debug, Default)]
pub(crate) struct ContainerOptions {
    /// Discriminator override; the type identifier is used when absent.
    pub(crate) name: Option<LitStr>,
    /// If true, values equal to `Default::default()` count as default state.
    pub(crate) default_check: bool,
}

/// Parses container-level `#[log_state(...)]` attributes.
pub(crate) fn parse_container_options(attrs: &[Attribute]) -> Result<ContainerOptions> {
    let mut options = ContainerOptions::default();

    for attr in attrs {
        if !attr.path().is_ident("log_state") {
            continue;
        }

        match &attr.meta {
            Meta::Path(_) => {}
            Meta::List(list) => {
                list.parse_nested_meta(|meta| {
                    if meta.path.is_ident("name") {
                        let value: LitStr = meta.value()?.parse()?;
                        if value.value().is_empty() {
                            return Err(syn::Error::new_spanned(
                                &value,
                                "log_state name must not be empty",
                            ));
                        }
                        options.name = Some(value);
                        Ok(())
                    } else if meta.path.is_ident("default") {
                        options.default_check = true;
                        Ok(())
                    } else {
                        Err(meta.error(format!(
                            "unknown container option `{}`; expected `name` or `default`",
                            meta.path
                                .get_ident()
                                .map_or_else(|| "?".to_string(), ToString::to_string)
                        )))
                    }
                })?;
            }
            Meta::NameValue(nv) => {
                return Err(syn::Error::new_spanned(
                    nv,
                    "name-value syntax is not supported for #[log_state]; use #[log_state(name = \"...\")]",
                ));
            }
        }
    }

    Ok(options)
}
