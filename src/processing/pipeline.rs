use geojson::{Feature, FeatureCollection};
use log::{debug, info, warn};

use crate::geometry::bounds::BoundingBox;
use crate::processing::attributes::{Record, build_properties};
use crate::processing::config::{FitOptions, PipelineConfig};
use crate::processing::flatten::flatten_text;

/// Yields the records of one update cycle, in display order.
pub trait RecordSource {
    fn records(&self) -> Vec<Record>;
}

impl RecordSource for Vec<Record> {
    fn records(&self) -> Vec<Record> {
        self.clone()
    }
}

/// Viewport fit request: `[minLng, minLat, maxLng, maxLat]` plus pass-through options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitRequest {
    pub bounds: [f64; 4],
    pub options: FitOptions,
}

/// The map side of the pipeline.
pub trait RenderSink {
    /// Whether the sink can take data right now.
    fn is_ready(&self) -> bool;
    /// Replaces everything the sink currently shows.
    fn set_data(&mut self, collection: FeatureCollection);
    fn fit_bounds(&mut self, request: FitRequest);
}

/// Result of one pipeline pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    pub collection: FeatureCollection,
    pub bounds: BoundingBox,
}

/// Runs one batch of records through attribute formatting, flattening and bounds
/// accumulation.
///
/// Inactive records are left out. Records whose GeoJSON is absent or cannot be
/// used contribute no features; the batch itself never fails.
pub fn process_records(records: &[Record], config: &PipelineConfig) -> PipelineOutput {
    let mut features: Vec<Feature> = Vec::new();
    let mut bounds = BoundingBox::new();
    let mut inactive = 0usize;

    for record in records {
        if !record.is_active(config) {
            inactive += 1;
            continue;
        }

        let properties = build_properties(record, config);
        let (flattened, skipped) = flatten_text(record.geojson.as_deref(), &properties);
        for err in &skipped {
            warn!("Record {}: skipping geometry: {}", record.id, err);
        }
        debug!(
            "Record {} produced {} feature(s)",
            record.id,
            flattened.len()
        );

        for feature in flattened {
            bounds.extend(&feature.geometry);
            features.push(feature.into());
        }
    }

    info!(
        "Processed {} record(s) into {} feature(s), {} inactive record(s) left out",
        records.len(),
        features.len(),
        inactive
    );

    PipelineOutput {
        collection: FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        },
        bounds,
    }
}

/// Drives pipeline passes into a sink, holding on to the newest output until the
/// sink is ready for it.
#[derive(Debug, Default)]
pub struct Pipeline {
    config: PipelineConfig,
    pending: Option<PipelineOutput>,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            pending: None,
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Processes the current batch of a source.
    pub fn process(&self, source: &impl RecordSource) -> PipelineOutput {
        process_records(&source.records(), &self.config)
    }

    /// Processes the current batch of a source and hands it to the sink.
    ///
    /// Returns `true` if the sink took the output, `false` if it was kept as pending.
    pub fn update(&mut self, source: &impl RecordSource, sink: &mut impl RenderSink) -> bool {
        let output = self.process(source);
        self.deliver(output, sink)
    }

    /// Hands an output to the sink, or keeps it (replacing any older one) until
    /// the sink is ready.
    pub fn deliver(&mut self, output: PipelineOutput, sink: &mut impl RenderSink) -> bool {
        if !sink.is_ready() {
            debug!("Sink not ready, deferring {} feature(s)", output.collection.features.len());
            self.pending = Some(output);
            return false;
        }
        self.pending = None;
        self.apply(output, sink);
        true
    }

    /// Delivers the pending output, if any, once the sink is ready.
    pub fn flush(&mut self, sink: &mut impl RenderSink) -> bool {
        if !sink.is_ready() {
            return false;
        }
        match self.pending.take() {
            Some(output) => {
                self.apply(output, sink);
                true
            }
            None => false,
        }
    }

    fn apply(&self, output: PipelineOutput, sink: &mut impl RenderSink) {
        sink.set_data(output.collection);
        if let Some(bounds) = output.bounds.to_bbox() {
            sink.fit_bounds(FitRequest {
                bounds,
                options: self.config.fit,
            });
        }
    }
}
