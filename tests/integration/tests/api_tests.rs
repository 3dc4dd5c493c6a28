//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Surface Tests
// ============================================================================

#[tokio::test]
async fn test_missing_token_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/study-groups").await.unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
    assert_eq!(err.error.code, "MISSING_AUTHORIZATION");
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .get_auth("/study-groups", "not-a-real-token")
        .await
        .unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
    assert_eq!(err.error.code, "INVALID_TOKEN");
}

// ============================================================================
// Study Group Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_group() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.spawn_user("Grace", "Hopper").await.unwrap();

    let payload = CreateGroupPayload::unique();
    let response = server
        .post_auth("/study-groups", &owner.token, &payload)
        .await
        .unwrap();
    let created: CreatedGroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(created.group.name, payload.name);
    assert_eq!(created.group.owner_id, owner.id);
    assert_eq!(created.group.member_count, 1);
    assert!(created.initial_meeting.is_none());

    let response = server
        .get_auth(&format!("/study-groups/{}", created.group.id), &owner.token)
        .await
        .unwrap();
    let fetched: GroupResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.id, created.group.id);
    assert_eq!(fetched.course_code, "CS2040");
}

#[tokio::test]
async fn test_create_group_with_initial_meeting() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.spawn_user("Grace", "Hopper").await.unwrap();

    let mut payload = CreateGroupPayload::unique();
    payload.initial_meeting = Some(InitialMeetingPayload {
        meeting: MeetingFields::one_time("Kickoff", "2030-03-10"),
        tag_ids: Vec::new(),
    });

    let response = server
        .post_auth("/study-groups", &owner.token, &payload)
        .await
        .unwrap();
    let created: CreatedGroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let meeting = created.initial_meeting.expect("initial meeting missing");
    assert_eq!(meeting.group_id, created.group.id);
    assert_eq!(meeting.name, "Kickoff");
    assert_eq!(meeting.created_by, owner.id);
    assert!(!meeting.is_recurring);
}

#[tokio::test]
async fn test_group_validation_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.spawn_user("Grace", "Hopper").await.unwrap();

    // Field bounds violated
    let mut payload = CreateGroupPayload::unique();
    payload.name = String::new();
    payload.max_capacity = 0;

    let response = server
        .post_auth("/study-groups", &owner.token, &payload)
        .await
        .unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error.code, "VALIDATION_ERROR");

    // Structurally broken body
    let response = server
        .post_auth("/study-groups", &owner.token, &serde_json::json!({}))
        .await
        .unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error.code, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_list_groups_scoped_to_caller() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = server.spawn_user("Alice", "Liddell").await.unwrap();
    let bob = server.spawn_user("Bob", "Fenwick").await.unwrap();

    let response = server
        .post_auth("/study-groups", &alice.token, &CreateGroupPayload::unique())
        .await
        .unwrap();
    let created: CreatedGroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    server
        .post_auth("/study-groups", &bob.token, &CreateGroupPayload::unique())
        .await
        .unwrap();

    let response = server.get_auth("/study-groups", &alice.token).await.unwrap();
    let groups: Vec<GroupResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].id, created.group.id);
}

#[tokio::test]
async fn test_update_group() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.spawn_user("Grace", "Hopper").await.unwrap();
    let other = server.spawn_user("Alan", "Turing").await.unwrap();

    let response = server
        .post_auth("/study-groups", &owner.token, &CreateGroupPayload::unique())
        .await
        .unwrap();
    let created: CreatedGroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/study-groups/{}", created.group.id);

    let update = UpdateGroupPayload {
        name: Some("Renamed Group".to_string()),
        ..UpdateGroupPayload::default()
    };
    let response = server.put_auth(&path, &owner.token, &update).await.unwrap();
    let updated: GroupResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.name, "Renamed Group");
    // Untouched fields survive
    assert_eq!(updated.course_code, created.group.course_code);

    // Only the owner may update
    let response = server.put_auth(&path, &other.token, &update).await.unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(err.error.code, "NOT_GROUP_OWNER");
}

#[tokio::test]
async fn test_delete_group() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.spawn_user("Grace", "Hopper").await.unwrap();

    let response = server
        .post_auth("/study-groups", &owner.token, &CreateGroupPayload::unique())
        .await
        .unwrap();
    let created: CreatedGroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/study-groups/{}", created.group.id);

    let response = server.delete_auth(&path, &owner.token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get_auth(&path, &owner.token).await.unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(err.error.code, "UNKNOWN_GROUP");
}

#[tokio::test]
async fn test_bad_group_path_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = server.spawn_user("Grace", "Hopper").await.unwrap();

    let response = server
        .get_auth("/study-groups/999999999", &user.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .get_auth("/study-groups/not-an-id", &user.token)
        .await
        .unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error.code, "INVALID_PATH_PARAMETER");
}

// ============================================================================
// Join Workflow Tests
// ============================================================================

#[tokio::test]
async fn test_join_public_group() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.spawn_user("Grace", "Hopper").await.unwrap();
    let joiner = server.spawn_user("Alan", "Turing").await.unwrap();

    let response = server
        .post_auth("/study-groups", &owner.token, &CreateGroupPayload::unique())
        .await
        .unwrap();
    let created: CreatedGroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let group_id = created.group.id;

    let response = server
        .post_auth_empty(&format!("/study-groups/{group_id}/join"), &joiner.token)
        .await
        .unwrap();
    let outcome: JoinOutcomeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(outcome.status, "joined");
    assert!(outcome.request_id.is_none());

    let response = server
        .get_auth(&format!("/study-groups/{group_id}/members"), &joiner.token)
        .await
        .unwrap();
    let members: Vec<MemberResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(members.len(), 2);
    assert!(members.iter().any(|m| m.user_id == joiner.id && !m.is_owner));
    assert!(members.iter().any(|m| m.user_id == owner.id && m.is_owner));
}

#[tokio::test]
async fn test_join_private_group_opens_request() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.spawn_user("Grace", "Hopper").await.unwrap();
    let joiner = server.spawn_user("Alan", "Turing").await.unwrap();

    let response = server
        .post_auth("/study-groups", &owner.token, &CreateGroupPayload::private())
        .await
        .unwrap();
    let created: CreatedGroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let group_id = created.group.id;

    let response = server
        .post_auth_empty(&format!("/study-groups/{group_id}/join"), &joiner.token)
        .await
        .unwrap();
    let outcome: JoinOutcomeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(outcome.status, "requested");
    let request_id = outcome.request_id.expect("request id missing");

    // No seat was granted
    let response = server
        .get_auth(&format!("/study-groups/{group_id}/members"), &joiner.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // The owner sees the pending request with the requester's name
    let response = server
        .get_auth(
            &format!("/study-groups/{group_id}/join-requests"),
            &owner.token,
        )
        .await
        .unwrap();
    let pending: Vec<JoinRequestResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, request_id);
    assert_eq!(pending[0].status, "pending");
    assert_eq!(pending[0].requester_name.as_deref(), Some("Alan Turing"));

    // The owner was notified
    let response = server.get_auth("/notifications", &owner.token).await.unwrap();
    let inbox: Vec<NotificationResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(inbox.len(), 1);
    assert_eq!(inbox[0].status, "unread");
    assert_eq!(inbox[0].request_id.as_deref(), Some(request_id.as_str()));
    assert!(inbox[0].message.contains("Alan Turing"));
}

#[tokio::test]
async fn test_full_group_rejects_join() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.spawn_user("Grace", "Hopper").await.unwrap();
    let joiner = server.spawn_user("Alan", "Turing").await.unwrap();

    // The owner's seat is the only one
    let response = server
        .post_auth(
            "/study-groups",
            &owner.token,
            &CreateGroupPayload::with_capacity(1),
        )
        .await
        .unwrap();
    let created: CreatedGroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth_empty(
            &format!("/study-groups/{}/join", created.group.id),
            &joiner.token,
        )
        .await
        .unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(err.error.code, "GROUP_FULL");
}

#[tokio::test]
async fn test_duplicate_join_request_conflict() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.spawn_user("Grace", "Hopper").await.unwrap();
    let joiner = server.spawn_user("Alan", "Turing").await.unwrap();

    let response = server
        .post_auth("/study-groups", &owner.token, &CreateGroupPayload::private())
        .await
        .unwrap();
    let created: CreatedGroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/study-groups/{}/request-join", created.group.id);

    let response = server.post_auth_empty(&path, &joiner.token).await.unwrap();
    let request: JoinRequestResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(request.status, "pending");

    let response = server.post_auth_empty(&path, &joiner.token).await.unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(err.error.code, "DUPLICATE_REQUEST");
}

#[tokio::test]
async fn test_approve_flow() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.spawn_user("Grace", "Hopper").await.unwrap();
    let joiner = server.spawn_user("Alan", "Turing").await.unwrap();

    let response = server
        .post_auth("/study-groups", &owner.token, &CreateGroupPayload::private())
        .await
        .unwrap();
    let created: CreatedGroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let group_id = created.group.id;

    let response = server
        .post_auth_empty(&format!("/study-groups/{group_id}/join"), &joiner.token)
        .await
        .unwrap();
    let outcome: JoinOutcomeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    let request_id = outcome.request_id.expect("request id missing");

    let approve_path = format!("/study-groups/{group_id}/join-requests/{request_id}/approve");
    let response = server
        .post_auth_empty(&approve_path, &owner.token)
        .await
        .unwrap();
    let resolved: JoinRequestResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(resolved.status, "approved");
    assert!(resolved.resolved_at.is_some());

    // The requester now holds a seat
    let response = server
        .get_auth(&format!("/study-groups/{group_id}/members"), &joiner.token)
        .await
        .unwrap();
    let members: Vec<MemberResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(members.len(), 2);

    // The request notification is gone from the owner's inbox
    let response = server.get_auth("/notifications", &owner.token).await.unwrap();
    let inbox: Vec<NotificationResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(inbox.is_empty());

    // A second resolution conflicts
    let response = server
        .post_auth_empty(&approve_path, &owner.token)
        .await
        .unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(err.error.code, "REQUEST_ALREADY_RESOLVED");
}

#[tokio::test]
async fn test_reject_flow() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.spawn_user("Grace", "Hopper").await.unwrap();
    let joiner = server.spawn_user("Alan", "Turing").await.unwrap();

    let response = server
        .post_auth("/study-groups", &owner.token, &CreateGroupPayload::private())
        .await
        .unwrap();
    let created: CreatedGroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let group_id = created.group.id;

    let response = server
        .post_auth_empty(&format!("/study-groups/{group_id}/join"), &joiner.token)
        .await
        .unwrap();
    let outcome: JoinOutcomeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    let request_id = outcome.request_id.expect("request id missing");

    let response = server
        .post_auth_empty(
            &format!("/study-groups/{group_id}/join-requests/{request_id}/reject"),
            &owner.token,
        )
        .await
        .unwrap();
    let resolved: JoinRequestResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(resolved.status, "rejected");

    // No seat was granted
    let response = server
        .get_auth(&format!("/study-groups/{group_id}/members"), &joiner.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_resolution_requires_owner() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.spawn_user("Grace", "Hopper").await.unwrap();
    let joiner = server.spawn_user("Alan", "Turing").await.unwrap();
    let bystander = server.spawn_user("Charles", "Babbage").await.unwrap();

    let response = server
        .post_auth("/study-groups", &owner.token, &CreateGroupPayload::private())
        .await
        .unwrap();
    let created: CreatedGroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let group_id = created.group.id;

    let response = server
        .post_auth_empty(&format!("/study-groups/{group_id}/join"), &joiner.token)
        .await
        .unwrap();
    let outcome: JoinOutcomeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    let request_id = outcome.request_id.expect("request id missing");

    let response = server
        .post_auth_empty(
            &format!("/study-groups/{group_id}/join-requests/{request_id}/approve"),
            &bystander.token,
        )
        .await
        .unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(err.error.code, "NOT_GROUP_OWNER");

    // The pending-request listing is owner-only as well
    let response = server
        .get_auth(
            &format!("/study-groups/{group_id}/join-requests"),
            &bystander.token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_my_pending_requests() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.spawn_user("Grace", "Hopper").await.unwrap();
    let joiner = server.spawn_user("Alan", "Turing").await.unwrap();

    let mut group_ids = Vec::new();
    for _ in 0..2 {
        let response = server
            .post_auth("/study-groups", &owner.token, &CreateGroupPayload::private())
            .await
            .unwrap();
        let created: CreatedGroupResponse =
            assert_json(response, StatusCode::CREATED).await.unwrap();
        group_ids.push(created.group.id);
    }

    for group_id in &group_ids {
        server
            .post_auth_empty(&format!("/study-groups/{group_id}/request-join"), &joiner.token)
            .await
            .unwrap();
    }

    let response = server
        .get_auth("/study-groups/join-requests", &joiner.token)
        .await
        .unwrap();
    let pending: Vec<JoinRequestResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(pending.len(), 2);
    // Newest first
    assert_eq!(pending[0].group_id, group_ids[1]);
    assert_eq!(pending[1].group_id, group_ids[0]);
    assert!(pending[0].group_name.is_some());
}

// ============================================================================
// Membership Tests
// ============================================================================

#[tokio::test]
async fn test_leave_group() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.spawn_user("Grace", "Hopper").await.unwrap();
    let joiner = server.spawn_user("Alan", "Turing").await.unwrap();

    let response = server
        .post_auth("/study-groups", &owner.token, &CreateGroupPayload::unique())
        .await
        .unwrap();
    let created: CreatedGroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let group_id = created.group.id;

    server
        .post_auth_empty(&format!("/study-groups/{group_id}/join"), &joiner.token)
        .await
        .unwrap();

    let response = server
        .delete_auth(&format!("/study-groups/{group_id}/members"), &joiner.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(&format!("/study-groups/{group_id}/members"), &owner.token)
        .await
        .unwrap();
    let members: Vec<MemberResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(members.len(), 1);
}

#[tokio::test]
async fn test_owner_cannot_leave() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.spawn_user("Grace", "Hopper").await.unwrap();

    let response = server
        .post_auth("/study-groups", &owner.token, &CreateGroupPayload::unique())
        .await
        .unwrap();
    let created: CreatedGroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(
            &format!("/study-groups/{}/members", created.group.id),
            &owner.token,
        )
        .await
        .unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(err.error.code, "OWNER_CANNOT_LEAVE");
}

#[tokio::test]
async fn test_remove_member() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.spawn_user("Grace", "Hopper").await.unwrap();
    let member = server.spawn_user("Alan", "Turing").await.unwrap();
    let other = server.spawn_user("Charles", "Babbage").await.unwrap();

    let response = server
        .post_auth("/study-groups", &owner.token, &CreateGroupPayload::unique())
        .await
        .unwrap();
    let created: CreatedGroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let group_id = created.group.id;

    for token in [&member.token, &other.token] {
        server
            .post_auth_empty(&format!("/study-groups/{group_id}/join"), token)
            .await
            .unwrap();
    }

    // A plain member cannot remove anyone
    let response = server
        .delete_auth(
            &format!("/study-groups/{group_id}/members/{}", member.id),
            &other.token,
        )
        .await
        .unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(err.error.code, "NOT_GROUP_OWNER");

    // The owner can
    let response = server
        .delete_auth(
            &format!("/study-groups/{group_id}/members/{}", member.id),
            &owner.token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(&format!("/study-groups/{group_id}/members"), &owner.token)
        .await
        .unwrap();
    let members: Vec<MemberResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(members.len(), 2);
    assert!(members.iter().all(|m| m.user_id != member.id));
}

#[tokio::test]
async fn test_member_listing_requires_membership() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.spawn_user("Grace", "Hopper").await.unwrap();
    let outsider = server.spawn_user("Alan", "Turing").await.unwrap();

    let response = server
        .post_auth("/study-groups", &owner.token, &CreateGroupPayload::unique())
        .await
        .unwrap();
    let created: CreatedGroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth(
            &format!("/study-groups/{}/members", created.group.id),
            &outsider.token,
        )
        .await
        .unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(err.error.code, "NOT_A_MEMBER");
}

// ============================================================================
// Meeting Tests
// ============================================================================

#[tokio::test]
async fn test_create_one_time_meeting() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.spawn_user("Grace", "Hopper").await.unwrap();

    let response = server
        .post_auth("/study-groups", &owner.token, &CreateGroupPayload::unique())
        .await
        .unwrap();
    let created: CreatedGroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let payload = CreateMeetingPayload::one_time(&created.group.id, "Midterm review", "2030-04-01");
    let response = server
        .post_auth("/meetings", &owner.token, &payload)
        .await
        .unwrap();
    let meeting: MeetingResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(meeting.group_id, created.group.id);
    assert_eq!(meeting.name, "Midterm review");
    assert_eq!(meeting.start_time, "14:00:00");
    assert!(!meeting.is_recurring);
    assert_eq!(meeting.meeting_date.as_deref(), Some("2030-04-01"));
    assert!(meeting.recurrence_days.is_none());

    // Fetch it back by id
    let response = server
        .get_auth(&format!("/meetings/{}", meeting.id), &owner.token)
        .await
        .unwrap();
    let fetched: MeetingResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.id, meeting.id);
}

#[tokio::test]
async fn test_create_recurring_meeting() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.spawn_user("Grace", "Hopper").await.unwrap();

    let response = server
        .post_auth("/study-groups", &owner.token, &CreateGroupPayload::unique())
        .await
        .unwrap();
    let created: CreatedGroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let payload = CreateMeetingPayload::recurring(
        &created.group.id,
        "Weekly sync",
        "2030-01-07",
        "2030-06-30",
        vec![1, 3],
    );
    let response = server
        .post_auth("/meetings", &owner.token, &payload)
        .await
        .unwrap();
    let meeting: MeetingResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert!(meeting.is_recurring);
    assert_eq!(meeting.recurrence_days, Some(vec![1, 3]));
    assert_eq!(meeting.start_date.as_deref(), Some("2030-01-07"));
    assert!(meeting.meeting_date.is_none());
}

#[tokio::test]
async fn test_recurring_requires_day_set() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.spawn_user("Grace", "Hopper").await.unwrap();

    let response = server
        .post_auth("/study-groups", &owner.token, &CreateGroupPayload::unique())
        .await
        .unwrap();
    let created: CreatedGroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let mut payload = CreateMeetingPayload::recurring(
        &created.group.id,
        "Weekly sync",
        "2030-01-07",
        "2030-06-30",
        vec![1, 3],
    );
    payload.meeting.recurrence_days = None;

    let response = server
        .post_auth("/meetings", &owner.token, &payload)
        .await
        .unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error.code, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_meeting_creation_requires_membership() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.spawn_user("Grace", "Hopper").await.unwrap();
    let outsider = server.spawn_user("Alan", "Turing").await.unwrap();

    let response = server
        .post_auth("/study-groups", &owner.token, &CreateGroupPayload::unique())
        .await
        .unwrap();
    let created: CreatedGroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let payload =
        CreateMeetingPayload::one_time(&created.group.id, "Crash the party", "2030-04-01");
    let response = server
        .post_auth("/meetings", &outsider.token, &payload)
        .await
        .unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(err.error.code, "NOT_A_MEMBER");
}

#[tokio::test]
async fn test_meeting_view_filter() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.spawn_user("Grace", "Hopper").await.unwrap();

    let response = server
        .post_auth("/study-groups", &owner.token, &CreateGroupPayload::unique())
        .await
        .unwrap();
    let created: CreatedGroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let group_id = created.group.id;

    for (name, date) in [("Past session", "2020-01-15"), ("Future session", "2030-01-15")] {
        server
            .post_auth(
                "/meetings",
                &owner.token,
                &CreateMeetingPayload::one_time(&group_id, name, date),
            )
            .await
            .unwrap();
    }

    let base = format!("/study-groups/{group_id}/meetings");

    let response = server.get_auth(&base, &owner.token).await.unwrap();
    let all: Vec<MeetingResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(all.len(), 2);

    let response = server
        .get_auth(&format!("{base}?view=upcoming"), &owner.token)
        .await
        .unwrap();
    let upcoming: Vec<MeetingResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].name, "Future session");

    let response = server
        .get_auth(&format!("{base}?view=past"), &owner.token)
        .await
        .unwrap();
    let past: Vec<MeetingResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(past.len(), 1);
    assert_eq!(past[0].name, "Past session");

    let response = server
        .get_auth(&format!("{base}?view=tomorrow"), &owner.token)
        .await
        .unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error.code, "INVALID_QUERY_PARAMETER");
}

#[tokio::test]
async fn test_update_meeting_swaps_schedule() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.spawn_user("Grace", "Hopper").await.unwrap();

    let response = server
        .post_auth("/study-groups", &owner.token, &CreateGroupPayload::unique())
        .await
        .unwrap();
    let created: CreatedGroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let payload = CreateMeetingPayload::one_time(&created.group.id, "Midterm review", "2030-04-01");
    let response = server
        .post_auth("/meetings", &owner.token, &payload)
        .await
        .unwrap();
    let meeting: MeetingResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Replace the one-time shape with a recurring one
    let update = MeetingFields::recurring("Weekly review", "2030-04-01", "2030-06-30", vec![2]);
    let response = server
        .put_auth(&format!("/meetings/{}", meeting.id), &owner.token, &update)
        .await
        .unwrap();
    let updated: MeetingResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.name, "Weekly review");
    assert!(updated.is_recurring);
    assert!(updated.meeting_date.is_none());
    assert_eq!(updated.recurrence_days, Some(vec![2]));
}

#[tokio::test]
async fn test_meeting_modification_is_guarded() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.spawn_user("Grace", "Hopper").await.unwrap();
    let creator = server.spawn_user("Alan", "Turing").await.unwrap();
    let bystander = server.spawn_user("Charles", "Babbage").await.unwrap();

    let response = server
        .post_auth("/study-groups", &owner.token, &CreateGroupPayload::unique())
        .await
        .unwrap();
    let created: CreatedGroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let group_id = created.group.id;

    for token in [&creator.token, &bystander.token] {
        server
            .post_auth_empty(&format!("/study-groups/{group_id}/join"), token)
            .await
            .unwrap();
    }

    let payload = CreateMeetingPayload::one_time(&group_id, "Study session", "2030-04-01");
    let response = server
        .post_auth("/meetings", &creator.token, &payload)
        .await
        .unwrap();
    let meeting: MeetingResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/meetings/{}", meeting.id);

    // A member who neither created the meeting nor owns the group cannot touch it
    let update = MeetingFields::one_time("Hijacked", "2030-04-02");
    let response = server
        .put_auth(&path, &bystander.token, &update)
        .await
        .unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(err.error.code, "NOT_MEETING_MODERATOR");

    // The group owner can delete it even without having created it
    let response = server.delete_auth(&path, &owner.token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get_auth(&path, &owner.token).await.unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(err.error.code, "UNKNOWN_MEETING");
}

// ============================================================================
// Notification Tests
// ============================================================================

#[tokio::test]
async fn test_notification_lifecycle() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.spawn_user("Grace", "Hopper").await.unwrap();
    let joiner = server.spawn_user("Alan", "Turing").await.unwrap();

    let response = server
        .post_auth("/study-groups", &owner.token, &CreateGroupPayload::private())
        .await
        .unwrap();
    let created: CreatedGroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    server
        .post_auth_empty(
            &format!("/study-groups/{}/join", created.group.id),
            &joiner.token,
        )
        .await
        .unwrap();

    let response = server.get_auth("/notifications", &owner.token).await.unwrap();
    let inbox: Vec<NotificationResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(inbox.len(), 1);
    let notification_id = inbox[0].id.clone();

    // Mark read
    let response = server
        .put_auth_empty(
            &format!("/notifications/{notification_id}/read"),
            &owner.token,
        )
        .await
        .unwrap();
    let read: NotificationResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(read.status, "read");

    // Delete
    let response = server
        .delete_auth(&format!("/notifications/{notification_id}"), &owner.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get_auth("/notifications", &owner.token).await.unwrap();
    let inbox: Vec<NotificationResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(inbox.is_empty());
}

#[tokio::test]
async fn test_notification_ownership() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.spawn_user("Grace", "Hopper").await.unwrap();
    let joiner = server.spawn_user("Alan", "Turing").await.unwrap();

    let response = server
        .post_auth("/study-groups", &owner.token, &CreateGroupPayload::private())
        .await
        .unwrap();
    let created: CreatedGroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    server
        .post_auth_empty(
            &format!("/study-groups/{}/join", created.group.id),
            &joiner.token,
        )
        .await
        .unwrap();

    let response = server.get_auth("/notifications", &owner.token).await.unwrap();
    let inbox: Vec<NotificationResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let notification_id = inbox[0].id.clone();

    // Someone else's notification reads as absent, not forbidden
    let response = server
        .put_auth_empty(
            &format!("/notifications/{notification_id}/read"),
            &joiner.token,
        )
        .await
        .unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(err.error.code, "UNKNOWN_NOTIFICATION");
}

#[tokio::test]
async fn test_inbox_pagination() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.spawn_user("Grace", "Hopper").await.unwrap();

    let response = server
        .post_auth("/study-groups", &owner.token, &CreateGroupPayload::private())
        .await
        .unwrap();
    let created: CreatedGroupResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Three distinct requesters, three notifications
    for (first, last) in [("Ada", "Lovelace"), ("Alan", "Turing"), ("Charles", "Babbage")] {
        let requester = server.spawn_user(first, last).await.unwrap();
        server
            .post_auth_empty(
                &format!("/study-groups/{}/join", created.group.id),
                &requester.token,
            )
            .await
            .unwrap();
    }

    let response = server
        .get_auth("/notifications?limit=2", &owner.token)
        .await
        .unwrap();
    let first_page: Vec<NotificationResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(first_page.len(), 2);
    // Newest first
    let newest: i64 = first_page[0].id.parse().unwrap();
    let older: i64 = first_page[1].id.parse().unwrap();
    assert!(newest > older);

    let cursor = &first_page[1].id;
    let response = server
        .get_auth(&format!("/notifications?limit=2&before={cursor}"), &owner.token)
        .await
        .unwrap();
    let second_page: Vec<NotificationResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(second_page.len(), 1);
    assert!(second_page[0].message.contains("Ada Lovelace"));

    // A malformed cursor is rejected
    let response = server
        .get_auth("/notifications?before=abc", &owner.token)
        .await
        .unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error.code, "INVALID_QUERY_PARAMETER");
}
