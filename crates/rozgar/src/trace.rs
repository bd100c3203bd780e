use std::io::Write;

use metrics_exporter_prometheus::{BuildError, Matcher, PrometheusBuilder, PrometheusHandle};
use opentelemetry::{KeyValue, global, trace::TracerProvider};
use opentelemetry_sdk::{
  Resource,
  propagation::TraceContextPropagator,
  trace::{BatchConfigBuilder, BatchSpanProcessor, Sampler, SdkTracerProvider},
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::api::config::{self, Config, Env};

pub fn build_prometheus() -> Result<PrometheusHandle, BuildError> {
  let builder = PrometheusBuilder::new()
    .add_global_label("service", "rozgar")
    .set_buckets_for_metric(Matcher::Full("rozgar_matching_scores".into()), &[0.2, 0.4, 0.6, 0.8, 1.0, 1.2])?
    .set_buckets_for_metric(Matcher::Full("rozgar_matching_latency_seconds".into()), &[0.00001, 0.0001, 0.001, 0.01, 0.1])?
    .set_buckets_for_metric(Matcher::Full("rozgar_request_latency_seconds".into()), &[0.001, 0.005, 0.01, 0.05, 0.1, 0.5])?;

  builder.install_recorder()
}

pub struct TraceGuards {
  _logging: WorkerGuard,
  trace: Option<SdkTracerProvider>,
}

impl Drop for TraceGuards {
  fn drop(&mut self) {
    if let Some(provider) = &self.trace
      && let Err(err) = provider.shutdown()
    {
      eprintln!("could not shut down tracing provider: {err}");
    }
  }
}

pub fn init_tracing(config: &Config, writer: impl Write + Send + 'static) -> TraceGuards {
  let (appender, logging_guard) = tracing_appender::non_blocking(writer);

  let logging_formatter = match config.env {
    #[cfg(not(test))]
    Env::Dev => fmt::layer().compact().with_writer(appender).with_ansi(true).boxed(),
    Env::Production => json_subscriber::layer()
      .with_writer(appender)
      .flatten_event(true)
      .flatten_span_list_on_top_level(true)
      .with_current_span(false)
      .with_span_list(false)
      .boxed(),

    #[cfg(test)]
    Env::Dev => fmt::layer().compact().with_writer(appender).with_ansi(false).boxed(),
  };

  let mut guards = TraceGuards { _logging: logging_guard, trace: None };
  let filter = EnvFilter::builder().try_from_env().or_else(|_| EnvFilter::try_new("info"));
  let layers = match filter {
    Ok(filter) => filter.and_then(logging_formatter).boxed(),
    Err(_) => logging_formatter,
  };

  global::set_text_map_propagator(TraceContextPropagator::new());

  let (layers, error) = match tracing_layer(&mut guards, config) {
    Ok(Some(tracing)) => (layers.and_then(tracing).boxed(), None),
    Ok(None) => (layers, None),
    Err(err) => (layers, Some(err)),
  };

  tracing_subscriber::registry().with(layers).init();

  if let Some(err) = error {
    tracing::warn!(%err, "could not initialize tracing provider");
  }

  guards
}

type TracingLayer = Box<dyn Layer<Registry> + Send + Sync>;

fn tracing_layer(guards: &mut TraceGuards, config: &Config) -> anyhow::Result<Option<TracingLayer>> {
  if !config.enable_tracing {
    return Ok(None);
  }

  let resource = Resource::builder_empty().with_attributes([KeyValue::new("service.name", "rozgar")]).build();
  let exporter = opentelemetry_otlp::SpanExporter::builder().with_tonic().build()?;
  let processor = BatchSpanProcessor::builder(exporter)
    .with_batch_config(BatchConfigBuilder::default().with_max_queue_size(8192).build())
    .build();

  let provider = SdkTracerProvider::builder()
    .with_sampler(Sampler::TraceIdRatioBased(config::parse_env("OTEL_TRACES_SAMPLER_ARGS", 0.1).unwrap_or(0.1)))
    .with_resource(resource)
    .with_span_processor(processor)
    .build();

  let tracer = provider.tracer("rozgar");

  guards.trace = Some(provider);

  Ok(Some(tracing_opentelemetry::layer().with_tracer(tracer).boxed()))
}
