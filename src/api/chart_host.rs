use std::sync::{Arc, Mutex, PoisonError};

use tracing::debug;

use crate::error::ChartResult;
use crate::extensions::{MarkerContent, marker_content};
use crate::render::ChartRenderer;

use super::view_registry::{ChartViewRegistry, ViewHandle};
use super::{ChartConfig, ChartDescription, ChartKind, map_chart};

/// One live chart: its last accepted config, the description derived from it
/// and the adapter that displays it.
///
/// The renderer sits behind its own lock so applies run outside the registry
/// lock and may call back into the host.
#[derive(Debug)]
pub struct ChartInstance<R> {
    pub kind: ChartKind,
    pub config: ChartConfig,
    pub description: ChartDescription,
    pub renderer: Arc<Mutex<R>>,
}

/// Boundary the host plugin layer talks to.
///
/// Every update is a full replacement: the description is rebuilt from the
/// new config and applied again, never patched.
#[derive(Debug)]
pub struct ChartHost<R> {
    registry: ChartViewRegistry<ChartInstance<R>>,
}

impl<R> Default for ChartHost<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> ChartHost<R> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: ChartViewRegistry::new(),
        }
    }

    #[must_use]
    pub fn registry(&self) -> &ChartViewRegistry<ChartInstance<R>> {
        &self.registry
    }

    /// Drops the chart behind `handle`. Unknown or stale handles return false.
    pub fn dispose(&self, handle: ViewHandle) -> bool {
        let removed = self.registry.remove(handle).is_some();
        debug!(raw_handle = handle.to_raw(), removed, "dispose chart view");
        removed
    }

    /// Marker content for a tap at data x `x`.
    #[must_use]
    pub fn marker_for(&self, handle: ViewHandle, x: f64) -> Option<MarkerContent> {
        self.registry
            .with_instance(handle, |instance| marker_content(&instance.description, x))
            .flatten()
    }

    /// Last description applied to `handle`.
    #[must_use]
    pub fn description(&self, handle: ViewHandle) -> Option<ChartDescription> {
        self.registry
            .with_instance(handle, |instance| instance.description.clone())
    }

    /// Runs `f` on the adapter of `handle` without holding the registry lock.
    pub fn with_renderer<U>(&self, handle: ViewHandle, f: impl FnOnce(&mut R) -> U) -> Option<U> {
        let renderer = self
            .registry
            .with_instance(handle, |instance| Arc::clone(&instance.renderer))?;
        let mut renderer = renderer.lock().unwrap_or_else(PoisonError::into_inner);
        Some(f(&mut renderer))
    }

    #[must_use]
    pub fn platform_version(&self) -> String {
        platform_version()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}

impl<R: ChartRenderer> ChartHost<R> {
    /// Maps `config`, applies it to `renderer` and registers the result.
    ///
    /// Nothing is registered when the renderer rejects the first apply.
    pub fn create(
        &self,
        kind: ChartKind,
        config: ChartConfig,
        mut renderer: R,
    ) -> ChartResult<ViewHandle> {
        let description = map_chart(kind, &config);
        renderer.apply(&description)?;
        let entries = description.entry_count();
        let handle = self.registry.insert(ChartInstance {
            kind,
            config,
            description,
            renderer: Arc::new(Mutex::new(renderer)),
        });
        debug!(
            raw_handle = handle.to_raw(),
            ?kind,
            entries,
            "created chart view"
        );
        Ok(handle)
    }

    /// Replaces the config of a live chart.
    ///
    /// Returns `Ok(false)` without side effects for an unknown handle. When the
    /// renderer fails, the previous config and description are kept. Mapping
    /// and the apply run outside the registry lock; the apply and the commit
    /// are serialized per chart by the renderer lock.
    pub fn update(&self, handle: ViewHandle, config: ChartConfig) -> ChartResult<bool> {
        let Some((kind, renderer)) = self
            .registry
            .with_instance(handle, |instance| (instance.kind, Arc::clone(&instance.renderer)))
        else {
            debug!(raw_handle = handle.to_raw(), "update for unknown chart view ignored");
            return Ok(false);
        };

        let description = map_chart(kind, &config);
        let mut renderer = renderer.lock().unwrap_or_else(PoisonError::into_inner);
        renderer.apply(&description)?;

        let committed = self
            .registry
            .with_instance_mut(handle, |instance| {
                instance.config = config;
                instance.description = description;
            })
            .is_some();
        drop(renderer);

        debug!(raw_handle = handle.to_raw(), committed, "updated chart view");
        Ok(committed)
    }

    pub fn create_from_json(
        &self,
        kind: ChartKind,
        config_json: &str,
        renderer: R,
    ) -> ChartResult<ViewHandle> {
        let config = ChartConfig::from_json_str(config_json)?;
        self.create(kind, config, renderer)
    }

    pub fn update_from_json(&self, handle: ViewHandle, config_json: &str) -> ChartResult<bool> {
        let config = ChartConfig::from_json_str(config_json)?;
        self.update(handle, config)
    }
}

/// Identifies the running platform, e.g. `"linux x86_64"`.
#[must_use]
pub fn platform_version() -> String {
    format!("{} {}", std::env::consts::OS, std::env::consts::ARCH)
}
