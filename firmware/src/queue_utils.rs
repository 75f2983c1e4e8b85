use heapless::spsc::Consumer;

/// Drain the queue, handing items over in the order they were enqueued.
pub fn dequeue_all<T, const N: usize>(
    consumer: &mut Consumer<'static, T, N>,
    mut process: impl FnMut(T),
) {
    while let Some(item) = consumer.dequeue() {
        process(item);
    }
}

pub fn warn_about_capacity<T, const N: usize>(name: &str, consumer: &mut Consumer<'static, T, N>) {
    if consumer.len() > consumer.capacity() / 2 {
        defmt::warn!(
            "Queue={:?} is above the half of its capacity {:?}/{:?}",
            name,
            consumer.len(),
            consumer.capacity()
        );
    }
}
