pub mod kubeconfig;
pub mod placeholder;
pub mod runner;
