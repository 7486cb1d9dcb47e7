//! # Entity definition tests

#[cfg(test)]
mod tests {
    use crate::actor::{ActorRef, StaffRole};
    use crate::client_memberships::MembershipStatus;
    use crate::{client_memberships, clients, membership_plans};
    use sea_orm::Set;

    #[test]
    fn test_client_creation() {
        let client = clients::ActiveModel {
            gym_id: Set(1),
            first_name: Set("Maria".to_string()),
            last_name: Set("Lopez".to_string()),
            phone: Set("555-0101".to_string()),
            email: Set(Some("maria@example.com".to_string())),
            is_active: Set(true),
            ..Default::default()
        };

        assert_eq!(client.first_name.as_ref(), "Maria");
        assert_eq!(client.is_active.as_ref(), &true);
    }

    #[test]
    fn test_membership_status_round_trip() {
        use sea_orm::ActiveEnum;

        assert_eq!(MembershipStatus::Active.to_value(), "active");
        assert_eq!(
            MembershipStatus::try_from_value(&"expired".to_string()).unwrap(),
            MembershipStatus::Expired
        );
        assert!(MembershipStatus::try_from_value(&"frozen".to_string()).is_err());
    }

    #[test]
    fn test_staff_role_parsing() {
        assert_eq!(StaffRole::parse("owner"), Some(StaffRole::Owner));
        assert_eq!(StaffRole::parse("Coach"), Some(StaffRole::Trainer));
        assert_eq!(StaffRole::parse("secretary"), Some(StaffRole::FrontDesk));
        assert_eq!(StaffRole::parse("member"), None);
        assert_eq!(StaffRole::FrontDesk.as_str(), "frontdesk");
    }

    #[test]
    fn test_actor_ref_from_columns() {
        let actor = ActorRef::from_columns(Some(StaffRole::FrontDesk), Some(7));
        assert_eq!(actor, Some(ActorRef::new(StaffRole::FrontDesk, 7)));

        // Both columns are required for a resolvable reference.
        assert_eq!(ActorRef::from_columns(Some(StaffRole::Owner), None), None);
        assert_eq!(ActorRef::from_columns(None, Some(3)), None);
    }

    #[test]
    fn test_membership_creation_defaults() {
        let membership = client_memberships::ActiveModel {
            client_id: Set(1),
            plan_id: Set(2),
            status: Set(MembershipStatus::Active),
            payment_method: Set("Cash".to_string()),
            auto_renew: Set(false),
            created_by_role: Set(Some(StaffRole::Owner)),
            created_by_id: Set(Some(1)),
            ..Default::default()
        };

        assert_eq!(membership.status.as_ref(), &MembershipStatus::Active);
        assert_eq!(membership.payment_method.as_ref(), "Cash");
    }

    #[test]
    fn test_plan_creation() {
        let plan = membership_plans::ActiveModel {
            gym_id: Set(1),
            name: Set("Gold".to_string()),
            price: Set(49.99),
            duration_days: Set(30),
            is_active: Set(true),
            ..Default::default()
        };

        assert_eq!(plan.name.as_ref(), "Gold");
        assert_eq!(plan.duration_days.as_ref(), &30);
    }
}
