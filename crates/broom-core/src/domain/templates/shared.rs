//! Files both state-management strategies generate.

pub const SERVICE: &str = r#"import '../db/dio_service.dart';

class {{pascalName}}Service {
  final DioService _dio = DioService();

  Future<dynamic> fetch() async {
    final response = await _dio.get('/{{featureName}}');
    return response.data;
  }
}
"#;

pub const DIO_SERVICE: &str = r#"import 'package:dio/dio.dart';
import 'package:pretty_dio_logger/pretty_dio_logger.dart';

enum UrlType {
  baseUrl,
}

class DioService {
  final Dio _dio;

  static String getBaseUrl(UrlType urlType) {
    switch (urlType) {
      case UrlType.baseUrl:
        return "";
    }
  }

  DioService() : _dio = Dio() {
    _dio.options = BaseOptions(
      connectTimeout: const Duration(seconds: 15),
      receiveTimeout: const Duration(seconds: 15),
      headers: {
        'Accept': 'application/json',
      },
    );

    _dio.interceptors.addAll([
      PrettyDioLogger(),
      _TokenInterceptor(),
    ]);
  }

  Future<Response> get(
    String path, {
    Map<String, dynamic>? queryParameters,
    Options? options,
    UrlType urlType = UrlType.baseUrl,
  }) async {
    try {
      return await _dio.get(getBaseUrl(urlType) + path,
          queryParameters: queryParameters, options: options);
    } catch (e) {
      throw _handleError(e);
    }
  }

  Future<Response> post(
    String path, {
    dynamic data,
    Map<String, dynamic>? queryParameters,
    Options? options,
    UrlType urlType = UrlType.baseUrl,
  }) async {
    try {
      return await _dio.post(getBaseUrl(urlType) + path,
          data: data, queryParameters: queryParameters, options: options);
    } catch (e) {
      throw _handleError(e);
    }
  }

  DioException _handleError(dynamic error) {
    if (error is DioException) {
      final message = switch (error.type) {
        DioExceptionType.connectionTimeout ||
        DioExceptionType.sendTimeout ||
        DioExceptionType.receiveTimeout =>
          'Connection timeout, please try again later.',
        DioExceptionType.badResponse =>
          'Server error: ${error.response?.statusCode}',
        DioExceptionType.cancel => 'Request cancelled.',
        DioExceptionType.connectionError => 'No internet connection.',
        _ => 'Network error occurred.',
      };

      return DioException(
        requestOptions: error.requestOptions,
        error: message,
        type: error.type,
        response: error.response,
      );
    }

    return DioException(
      requestOptions: RequestOptions(path: ''),
      error: 'Unknown error',
    );
  }
}

class _TokenInterceptor extends Interceptor {
  @override
  void onRequest(RequestOptions options, RequestInterceptorHandler handler) {
    handler.next(options);
  }
}
"#;

pub const DIALOG_HELPER: &str = r#"import 'package:flutter/material.dart';

class DialogHelper {
  static Future<void> showMessage(
    BuildContext context, {
    required String title,
    required String message,
  }) {
    return showDialog<void>(
      context: context,
      builder: (context) => AlertDialog(
        title: Text(title),
        content: Text(message),
        actions: [
          TextButton(
            onPressed: () => Navigator.of(context).pop(),
            child: const Text('OK'),
          ),
        ],
      ),
    );
  }

  static Future<bool> confirm(
    BuildContext context, {
    required String title,
    required String message,
  }) async {
    final result = await showDialog<bool>(
      context: context,
      builder: (context) => AlertDialog(
        title: Text(title),
        content: Text(message),
        actions: [
          TextButton(
            onPressed: () => Navigator.of(context).pop(false),
            child: const Text('Cancel'),
          ),
          TextButton(
            onPressed: () => Navigator.of(context).pop(true),
            child: const Text('Yes'),
          ),
        ],
      ),
    );
    return result ?? false;
  }
}
"#;

pub const APP_ROUTES: &str = r#"class AppRoutes {
  // Feature routes
}
"#;

pub const APP_ROUTES_PROVIDER: &str = r#"import 'package:flutter/material.dart';
import 'app_routes.dart';

class AppRoutesProvider {
  static Map<String, WidgetBuilder> getRoutes() {
    return {
      // Route mappings
    };
  }
}
"#;

pub const ROUTE_CONSTANT: &str = "  static const String {{camelName}} = '/{{snakeName}}';";
pub const ROUTE_MAPPING: &str = "      AppRoutes.{{camelName}}: (context) => const {{pascalName}}Page(),";
pub const PAGE_IMPORT: &str = "import '../pages/{{snakeName}}/{{snakeName}}_page.dart';";

pub const CLASS_APP_ROUTES: &str = r"(?P<open>class AppRoutes \{)(?P<body>[\s\S]*?)(?P<close>\})";
pub const RETURN_MAP: &str = r"(?P<open>return \{)(?P<body>[\s\S]*?)(?P<close>[ \t]*\};)";
pub const RETURN_LIST: &str = r"(?P<open>return \[)(?P<body>[\s\S]*?)(?P<close>[ \t]*\];)";
