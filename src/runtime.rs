use std::time::{Duration, Instant};

use async_stream::stream;
use futures::{Stream, StreamExt};
use tokio::time::sleep;

/// Number of values [`measure_runtime`] collects per run.
pub const GENERATED_VALUES: usize = 10;
/// Delay before each yielded value in [`measure_runtime`].
pub const GENERATION_DELAY: Duration = Duration::from_secs(1);

const CONCURRENT_RUNS: usize = 4;

/// Yield `count` random floats in `[0, 10)`, sleeping `delay` before each.
pub fn async_generator(count: usize, delay: Duration) -> impl Stream<Item = f64> {
    stream! {
        for _ in 0..count {
            sleep(delay).await;
            yield rand::random::<f64>() * 10.0;
        }
    }
}

/// Collect the output of [`async_generator`] into a vector.
pub async fn async_comprehension(count: usize, delay: Duration) -> Vec<f64> {
    async_generator(count, delay).collect().await
}

/// Run four [`async_comprehension`] invocations concurrently and return the
/// wall-clock elapsed seconds.
///
/// The four runs interleave on one scheduler, so with the defaults this takes
/// about 10 seconds rather than 40. All four are awaited before returning.
pub async fn measure_runtime() -> f64 {
    measure_runtime_with(GENERATED_VALUES, GENERATION_DELAY).await
}

/// Same as [`measure_runtime`] with an explicit value count and delay.
pub async fn measure_runtime_with(count: usize, delay: Duration) -> f64 {
    let start = Instant::now();
    futures::future::join_all((0..CONCURRENT_RUNS).map(|_| async_comprehension(count, delay)))
        .await;
    let elapsed = start.elapsed().as_secs_f64();
    log::debug!(
        "{} concurrent runs of {} values finished in {:.3}s",
        CONCURRENT_RUNS,
        count,
        elapsed
    );
    elapsed
}
