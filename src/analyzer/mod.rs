//! Manifest parsing and per-project classification.
//!
//! - [`dotnet`] — extracts `<PackageReference>` names from `.csproj` files and maps
//!   them to a runner family and auxiliary library flags.

pub mod dotnet;
