//! # Entity module
//!
//! Sea-ORM entity definitions for the gym management schema.

pub mod actor;

pub mod access_tokens;
pub mod admins;
pub mod attendance;
pub mod class_registrations;
pub mod class_sessions;
pub mod client_memberships;
pub mod clients;
pub mod equipment;
pub mod equipment_maintenance;
pub mod events;
pub mod gym_classes;
pub mod gyms;
pub mod membership_plans;
pub mod payments;
pub mod product_sales;
pub mod products;
pub mod secretaries;
pub mod trainers;

pub use actor::{ActorRef, StaffRole};
pub use client_memberships::MembershipStatus;

pub use access_tokens::Entity as AccessTokens;
pub use admins::Entity as Admins;
pub use attendance::Entity as Attendance;
pub use class_registrations::Entity as ClassRegistrations;
pub use class_sessions::Entity as ClassSessions;
pub use client_memberships::Entity as ClientMemberships;
pub use clients::Entity as Clients;
pub use equipment::Entity as Equipment;
pub use equipment_maintenance::Entity as EquipmentMaintenance;
pub use events::Entity as Events;
pub use gym_classes::Entity as GymClasses;
pub use gyms::Entity as Gyms;
pub use membership_plans::Entity as MembershipPlans;
pub use payments::Entity as Payments;
pub use product_sales::Entity as ProductSales;
pub use products::Entity as Products;
pub use secretaries::Entity as Secretaries;
pub use trainers::Entity as Trainers;

#[cfg(test)]
mod tests;
