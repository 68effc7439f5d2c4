// Export modules for library usage
pub mod benchmark;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod effects;
pub mod errors;
pub mod formatting;
pub mod impact;
pub mod io;
pub mod observability;
pub mod pipeline;
pub mod portfolio;
pub mod profile;
pub mod roi;
pub mod session;
pub mod store;
pub mod summary;
pub mod validation;

// Re-export commonly used types
pub use crate::errors::{Error, Result};

pub use crate::core::{
    Bottleneck, CompanyMetrics, EffortLevel, Frequency, Insight, Priority, SolutionComplexity,
};

pub use crate::impact::{annualize, default_priority, BottleneckImpact};

pub use crate::benchmark::{benchmark, BenchmarkResult, IndustryBenchmark, PerformanceRating};

pub use crate::roi::{calculate_roi, RoiCalculation};

pub use crate::portfolio::{calculate_portfolio, ImplementationPhase, PortfolioResult, PortfolioSummary};

pub use crate::summary::{executive_summary, ExecutiveSummary, RecommendationTier};

pub use crate::profile::{analyze_business_metrics, BusinessProfile};

pub use crate::session::ConsultationSession;

pub use crate::pipeline::{DataRecord, RecordPipeline};

pub use crate::store::{ConsultationStore, InMemoryStore};

pub use crate::validation::AnalysisInput;

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
