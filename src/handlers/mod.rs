// Route handlers, one module per resource. Gates are applied as route
// layers in `app`, so handlers only see requests that passed them.
pub mod auth;
pub mod companies;
pub mod jobs;
pub mod probes;
pub mod technologies;
pub mod users;
