// CV composition. Text only; PDF rendering is deliberately absent.

pub mod cv_composer;
