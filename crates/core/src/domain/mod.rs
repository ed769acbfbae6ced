pub mod ignore;
