/// State holder pattern: a pure reducer over an immutable state value.
///
/// Implementors never mutate `state`; observers see a fresh value for every
/// accepted event.
pub trait StateHolder: 'static {
    type State: Clone;
    type Event;

    fn initial_state() -> Self::State;
    fn reduce(state: &Self::State, event: Self::Event) -> Self::State;
}
