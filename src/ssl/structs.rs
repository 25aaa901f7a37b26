pub mod certificate_bundle;
