//! Section-renderer registry: explicit bindings from section keys to
//! specialized array renderers.
//!
//! The original page special-cased string keys inline at the dispatch site;
//! here the bindings are data so a new array-valued fixture key either gets
//! an explicit binding or falls through to the documented generic renderer,
//! never a silent misrender.

/// Specialized renderer selector for an array-valued section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionRenderer {
    /// Card grid of officials (name, role, office, contact).
    Officials,
    /// Card grid of committees (title, chairperson).
    Committees,
    /// Fallback: render each element recursively in input order.
    Generic,
}

#[derive(Debug, Clone)]
struct Binding {
    key: String,
    renderer: SectionRenderer,
}

/// Registry of built-in and caller-added section bindings.
#[derive(Debug, Clone)]
pub struct SectionRegistry {
    bindings: Vec<Binding>,
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self {
            bindings: builtin_bindings(),
        }
    }
}

impl SectionRegistry {
    /// Renderer for an array under `section_key`. Unknown keys (and the empty
    /// key for top-level arrays) get the generic renderer.
    #[must_use]
    pub fn lookup(&self, section_key: &str) -> SectionRenderer {
        self.bindings
            .iter()
            .find(|b| b.key == section_key)
            .map_or(SectionRenderer::Generic, |b| b.renderer)
    }

    /// Bind a key to a specialized renderer. A later binding for the same key
    /// shadows the built-in one.
    pub fn bind(&mut self, key: impl Into<String>, renderer: SectionRenderer) {
        let key = key.into();
        self.bindings.insert(0, Binding { key, renderer });
    }
}

fn builtin_bindings() -> Vec<Binding> {
    [
        ("officials", SectionRenderer::Officials),
        ("secretariat_officials", SectionRenderer::Officials),
        ("permanent_committees", SectionRenderer::Committees),
    ]
    .into_iter()
    .map(|(key, renderer)| Binding {
        key: key.to_string(),
        renderer,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_bindings_cover_the_known_grids() {
        let registry = SectionRegistry::default();
        assert_eq!(registry.lookup("officials"), SectionRenderer::Officials);
        assert_eq!(
            registry.lookup("secretariat_officials"),
            SectionRenderer::Officials
        );
        assert_eq!(
            registry.lookup("permanent_committees"),
            SectionRenderer::Committees
        );
    }

    #[test]
    fn unknown_keys_fall_through_to_generic() {
        let registry = SectionRegistry::default();
        assert_eq!(registry.lookup("regional_offices"), SectionRenderer::Generic);
        assert_eq!(registry.lookup(""), SectionRenderer::Generic);
    }

    #[test]
    fn custom_binding_shadows_builtin() {
        let mut registry = SectionRegistry::default();
        registry.bind("house_committees", SectionRenderer::Committees);
        registry.bind("officials", SectionRenderer::Generic);
        assert_eq!(
            registry.lookup("house_committees"),
            SectionRenderer::Committees
        );
        assert_eq!(registry.lookup("officials"), SectionRenderer::Generic);
    }
}
