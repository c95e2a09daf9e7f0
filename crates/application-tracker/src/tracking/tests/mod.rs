mod aggregates;
mod common;
mod routing;
