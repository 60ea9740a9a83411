//! Macros for declarative graph construction.

/// Write a transition graph as a literal.
///
/// Expands to a [`Config`](crate::Config); the first line names the
/// starting state, each following arm declares a state and its
/// event-to-destination table.
///
/// # Example
///
/// ```
/// use machina::{state_graph, Fsm};
///
/// let config = state_graph! {
///     initial: "locked";
///     "locked" => { "coin" => "unlocked" };
///     "unlocked" => { "push" => "locked" };
/// };
///
/// let mut fsm = Fsm::new(config)?;
/// fsm.trigger("coin")?;
/// assert_eq!(fsm.current_state(), "unlocked");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[macro_export]
macro_rules! state_graph {
    (
        initial: $initial:expr;
        $(
            $state:expr => { $( $event:expr => $to:expr ),* $(,)? }
        );* $(;)?
    ) => {
        $crate::Config {
            states: vec![
                $(
                    $crate::StateDef::named($state)
                        $( .on($event, $to) )*
                ),*
            ],
            initial: ::std::string::String::from($initial),
        }
    };
}
