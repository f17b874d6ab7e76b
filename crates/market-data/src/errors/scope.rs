/// Classification for failure handling during a fetch cycle.
///
/// Used to determine whether the snapshot fetcher absorbs an error or
/// propagates it.
///
/// # Behavior Summary
///
/// | Scope | Abort Cycle? | Snapshot Entry |
/// |-------|--------------|----------------|
/// | `Symbol` | No | Zero return under today's date |
/// | `Cycle` | Yes | None (snapshot discarded) |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FailureScope {
    /// The failure is attributable to a single symbol.
    ///
    /// Network errors, malformed payloads and insufficient price history
    /// are recovered locally: the symbol is recorded with a zero return
    /// and the loop continues with the next symbol.
    Symbol,

    /// The failure affects the whole fetch cycle.
    ///
    /// The cycle is aborted and the error surfaces to the caller, which
    /// must show an error state rather than partial data.
    Cycle,
}
