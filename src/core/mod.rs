// Decision core: cortex scoring, broca generation, governance ledger,
// preference adaptation, intent routing and the pipeline that ties them.

pub mod broca;
pub mod cortex;
pub mod governance;
pub mod intent;
pub mod pipeline;
pub mod preference;
pub mod profile;
