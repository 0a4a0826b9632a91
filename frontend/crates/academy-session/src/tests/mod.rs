mod bootstrap;
mod dashboard;
mod support;
