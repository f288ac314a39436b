//! Route path constants.

pub const GET_API_HEALTH: &str = "/api/health";

pub const GET_API_CATALOG: &str = "/api/catalog";
pub const GET_API_CATALOG_ENDPOINTS: &str = "/api/catalog/endpoints";
pub const GET_API_CATALOG_ENDPOINTS_BY_TAG: &str = "/api/catalog/endpoints/by-tag";
pub const GET_API_CATALOG_SCHEMAS: &str = "/api/catalog/schemas";
pub const GET_API_CATALOG_SCHEMAS_NAME: &str = "/api/catalog/schemas/{name}";

pub const POST_API_GEOMETRY_MEMBER_LENGTH: &str = "/api/geometry/member-length";

pub const API_DASHBOARDS: &str = "/api/dashboards";
pub const GET_API_DASHBOARDS_DEFAULT: &str = "/api/dashboards/default";
pub const API_DASHBOARDS_CURRENT: &str = "/api/dashboards/current";
pub const API_DASHBOARDS_ID: &str = "/api/dashboards/{id}";
pub const POST_API_DASHBOARDS_ID_WIDGETS: &str = "/api/dashboards/{id}/widgets";
pub const API_DASHBOARDS_ID_WIDGETS_WIDGET_ID: &str = "/api/dashboards/{id}/widgets/{widget_id}";
pub const PATCH_API_DASHBOARDS_ID_WIDGETS_WIDGET_ID_POSITION: &str =
    "/api/dashboards/{id}/widgets/{widget_id}/position";
pub const PATCH_API_DASHBOARDS_ID_WIDGETS_WIDGET_ID_SIZE: &str =
    "/api/dashboards/{id}/widgets/{widget_id}/size";
pub const GET_API_DASHBOARDS_ID_WIDGETS_WIDGET_ID_DATA: &str =
    "/api/dashboards/{id}/widgets/{widget_id}/data";

pub const GET_API_PROJECTS: &str = "/api/projects";
pub const GET_API_COMPONENT_DESIGNS_GUID: &str = "/api/component-designs/{guid}";
pub const POST_API_LUMBER_PRICES: &str = "/api/lumber-prices";
pub const GET_API_PLATE_TYPES_PLATE_TYPE: &str = "/api/plate-types/{plate_type}";

pub const API_PRODUCTION_GUID: &str = "/api/production/{guid}";
