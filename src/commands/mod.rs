mod check;
mod empty;
mod peek;
mod pop;
mod push;
mod reverse;
mod show;
mod wait;

pub use check::Check;
pub use empty::Empty;
pub use peek::Peek;
pub use pop::Pop;
pub use push::Push;
pub use reverse::Reverse;
pub use show::Show;
pub use wait::Wait;
