use std::sync::Arc;

use tokio::task::JoinSet;

use crate::error::PressError;
use crate::models::{DisplaySpec, PipelineConfig, RgbaImage};
use crate::pipeline::{process_image, PressOutput};
use crate::rendering::{fit_frame, FitLimits, FitStrategy};

/// One image to render, with everything needed to do it in isolation.
#[derive(Debug, Clone)]
pub struct PressJob {
    pub image: RgbaImage,
    pub config: PipelineConfig,
    /// Fit the image to `display` before processing
    pub fit: Option<FitStrategy>,
}

impl PressJob {
    pub fn new(image: RgbaImage, config: PipelineConfig) -> Self {
        Self {
            image,
            config,
            fit: None,
        }
    }

    pub fn with_fit(mut self, strategy: FitStrategy) -> Self {
        self.fit = Some(strategy);
        self
    }
}

/// Runs pipeline jobs off the async runtime.
///
/// Every job is rendered at the display's bit depth, whatever its config
/// asks for. Jobs share no mutable state, so any number may run at once.
#[derive(Debug, Clone)]
pub struct PressService {
    display: DisplaySpec,
    limits: Arc<FitLimits>,
}

impl PressService {
    pub fn new(display: DisplaySpec) -> Self {
        Self {
            display,
            limits: Arc::new(FitLimits::default()),
        }
    }

    pub fn with_limits(mut self, limits: FitLimits) -> Self {
        self.limits = Arc::new(limits);
        self
    }

    pub fn display(&self) -> DisplaySpec {
        self.display
    }

    /// Render a single job
    ///
    /// Uses spawn_blocking so the dithering and deflate work does not stall
    /// the runtime.
    pub async fn render(&self, job: PressJob) -> Result<PressOutput, PressError> {
        let display = self.display;
        let limits = self.limits.clone();

        tokio::task::spawn_blocking(move || run_job(job, display, &limits))
            .await
            .map_err(|e| PressError::Task(e.to_string()))?
    }

    /// Render many jobs concurrently. Results come back in submission
    /// order; one failing job does not affect the others.
    pub async fn render_all(&self, jobs: Vec<PressJob>) -> Vec<Result<PressOutput, PressError>> {
        let count = jobs.len();
        let mut set = JoinSet::new();
        for (slot, job) in jobs.into_iter().enumerate() {
            let display = self.display;
            let limits = self.limits.clone();
            set.spawn_blocking(move || (slot, run_job(job, display, &limits)));
        }

        let mut results: Vec<Option<Result<PressOutput, PressError>>> =
            (0..count).map(|_| None).collect();
        while let Some(joined) = set.join_next().await {
            match joined {
                Ok((slot, result)) => results[slot] = Some(result),
                Err(e) => tracing::error!(error = %e, "Render task failed"),
            }
        }

        results
            .into_iter()
            .map(|r| r.unwrap_or_else(|| Err(PressError::Task("task did not finish".into()))))
            .collect()
    }
}

fn run_job(
    job: PressJob,
    display: DisplaySpec,
    limits: &FitLimits,
) -> Result<PressOutput, PressError> {
    let image = match job.fit {
        Some(strategy) => {
            fit_frame(&job.image, display.width, display.height, strategy, limits)?
        }
        None => job.image,
    };
    let config = PipelineConfig {
        bit_depth: display.bit_depth.bits(),
        ..job.config
    };
    process_image(&image, &config)
}
