pub const MAIN: &str = r#"import 'package:flutter/material.dart';
import 'package:flutter_riverpod/flutter_riverpod.dart';
import 'presentation/routes/app_routes.dart';
import 'presentation/routes/app_routes_provider.dart';

void main() {
  WidgetsFlutterBinding.ensureInitialized();

  runApp(
    const ProviderScope(
      child: MyApp(),
    ),
  );
}

class MyApp extends StatelessWidget {
  const MyApp({super.key});

  @override
  Widget build(BuildContext context) {
    return MaterialApp(
      title: 'My App',
      theme: ThemeData.light(),
      debugShowCheckedModeBanner: false,
      initialRoute: AppRoutes.home,
      routes: AppRoutesProvider.getRoutes(),
    );
  }
}
"#;

pub const LOGGER_SERVICE: &str = r#"import 'package:logger/logger.dart';

class LoggerService {
  LoggerService._();

  static final LoggerService instance = LoggerService._();

  final Logger _logger = Logger(printer: PrettyPrinter(methodCount: 0));

  void d(String message, {String? tag}) => _logger.d(_format(message, tag));

  void i(String message, {String? tag}) => _logger.i(_format(message, tag));

  void w(String message, {String? tag}) => _logger.w(_format(message, tag));

  void e(String message, {Object? error, StackTrace? stackTrace, String? tag}) =>
      _logger.e(_format(message, tag), error: error, stackTrace: stackTrace);

  String _format(String message, String? tag) =>
      tag == null ? message : '[$tag] $message';
}
"#;

pub const HTTP_SERVICE: &str = r#"import 'dart:async';
import 'dart:convert';
import 'dart:io';

import 'package:http/http.dart' as http;

enum UrlType {
  baseUrl,
  customUrl,
}

class HttpResponse {
  final int statusCode;
  final String body;
  final Map<String, String> headers;

  HttpResponse({
    required this.statusCode,
    required this.body,
    required this.headers,
  });

  bool get isSuccessful => statusCode >= 200 && statusCode < 300;

  dynamic get decodedBody => jsonDecode(body);

  Map<String, dynamic> get decodedBodyAsMap => decodedBody as Map<String, dynamic>;

  List<dynamic> get decodedBodyAsList => decodedBody as List<dynamic>;
}

class HttpError implements Exception {
  final String message;
  final int? statusCode;
  final String? body;

  HttpError({
    required this.message,
    this.statusCode,
    this.body,
  });

  @override
  String toString() => message;
}

class HttpService {
  static const Duration defaultTimeout = Duration(seconds: 15);

  static String getBaseUrl(UrlType urlType) {
    switch (urlType) {
      case UrlType.baseUrl:
        return 'https://pokeapi.co/api/v2';
      case UrlType.customUrl:
        return '';
    }
  }

  static Uri _uri(String path, UrlType urlType, bool isFullUrl, Map<String, String>? query) {
    final url = isFullUrl ? path : getBaseUrl(urlType) + path;
    return Uri.parse(url).replace(queryParameters: query);
  }

  static Future<Map<String, String>> _headers({Map<String, String>? headers}) async {
    final Map<String, String> defaults = {
      'Content-Type': 'application/json',
      'Accept': 'application/json',
    };

    final String? token = await _getToken();
    if (token != null) {
      defaults['Authorization'] = 'Bearer $token';
    }

    return headers != null ? {...defaults, ...headers} : defaults;
  }

  static Future<HttpResponse> get(
    String path, {
    Map<String, String>? queryParameters,
    Map<String, String>? headers,
    UrlType urlType = UrlType.baseUrl,
    bool isFullUrl = false,
  }) async {
    final url = _uri(path, urlType, isFullUrl, queryParameters);
    final requestHeaders = await _headers(headers: headers);
    return _send(() => http.get(url, headers: requestHeaders));
  }

  static Future<HttpResponse> post(
    String path, {
    dynamic data,
    Map<String, String>? queryParameters,
    Map<String, String>? headers,
    UrlType urlType = UrlType.baseUrl,
    bool isFullUrl = false,
  }) async {
    final url = _uri(path, urlType, isFullUrl, queryParameters);
    final requestHeaders = await _headers(headers: headers);
    final body = data != null ? jsonEncode(data) : '';
    return _send(() => http.post(url, headers: requestHeaders, body: body));
  }

  static Future<HttpResponse> put(
    String path, {
    dynamic data,
    Map<String, String>? queryParameters,
    Map<String, String>? headers,
    UrlType urlType = UrlType.baseUrl,
    bool isFullUrl = false,
  }) async {
    final url = _uri(path, urlType, isFullUrl, queryParameters);
    final requestHeaders = await _headers(headers: headers);
    final body = data != null ? jsonEncode(data) : '';
    return _send(() => http.put(url, headers: requestHeaders, body: body));
  }

  static Future<HttpResponse> patch(
    String path, {
    dynamic data,
    Map<String, String>? queryParameters,
    Map<String, String>? headers,
    UrlType urlType = UrlType.baseUrl,
    bool isFullUrl = false,
  }) async {
    final url = _uri(path, urlType, isFullUrl, queryParameters);
    final requestHeaders = await _headers(headers: headers);
    final body = data != null ? jsonEncode(data) : '';
    return _send(() => http.patch(url, headers: requestHeaders, body: body));
  }

  static Future<HttpResponse> delete(
    String path, {
    Map<String, String>? queryParameters,
    Map<String, String>? headers,
    UrlType urlType = UrlType.baseUrl,
    bool isFullUrl = false,
  }) async {
    final url = _uri(path, urlType, isFullUrl, queryParameters);
    final requestHeaders = await _headers(headers: headers);
    return _send(() => http.delete(url, headers: requestHeaders));
  }

  static Future<HttpResponse> postFormData(
    String path, {
    required Map<String, dynamic> fields,
    List<http.MultipartFile>? files,
    Map<String, String>? queryParameters,
    UrlType urlType = UrlType.baseUrl,
    bool isFullUrl = false,
  }) async {
    final request = http.MultipartRequest('POST', _uri(path, urlType, isFullUrl, queryParameters));

    final String? token = await _getToken();
    if (token != null) {
      request.headers['Authorization'] = 'Bearer $token';
    }
    fields.forEach((key, value) => request.fields[key] = value.toString());
    if (files != null) {
      request.files.addAll(files);
    }

    return _send(() async => http.Response.fromStream(await request.send()));
  }

  static Future<HttpResponse> _send(Future<http.Response> Function() request) async {
    try {
      final response = await request().timeout(defaultTimeout);
      return _processResponse(response);
    } catch (e) {
      throw _handleError(e);
    }
  }

  static HttpResponse _processResponse(http.Response response) {
    if (response.statusCode >= 400) {
      if (response.statusCode == 401) {
        _refreshToken();
      }
      throw HttpError(
        message: 'HTTP Error: ${response.statusCode}',
        statusCode: response.statusCode,
        body: response.body,
      );
    }

    return HttpResponse(
      statusCode: response.statusCode,
      body: response.body,
      headers: response.headers,
    );
  }

  static HttpError _handleError(dynamic error) {
    if (error is SocketException) {
      return HttpError(message: 'No Internet connection.');
    } else if (error is FormatException) {
      return HttpError(message: 'Bad response format.');
    } else if (error is TimeoutException) {
      return HttpError(message: 'Connection timeout, please try again later.');
    } else if (error is HttpError) {
      return error;
    }
    return HttpError(message: 'Unknown error: ${error.toString()}');
  }

  static Future<String?> _getToken() async {
    // Replace with the app's token storage.
    return null;
  }

  static Future<String?> _refreshToken() async {
    return null;
  }
}
"#;

pub const BASE_STATE_NOTIFIER: &str = r#"import 'package:flutter/material.dart';
import 'package:flutter_riverpod/flutter_riverpod.dart';

import '../services/logger_service.dart';

/// Base class for every feature notifier.
abstract class BaseStateNotifier<T> extends StateNotifier<T> {
  final Ref _ref;
  BuildContext? _context;
  final LoggerService _logger = LoggerService.instance;
  bool _onReadyCalled = false;

  LoggerService get logger => _logger;
  Ref get ref => _ref;
  BuildContext? get context => _context;
  String get logTag => runtimeType.toString();

  BaseStateNotifier(super.initialState, this._ref) {
    onInit();
    Future.microtask(() {
      if (mounted && !_onReadyCalled) {
        _onReadyCalled = true;
        onReady();
      }
    });
  }

  void setContext(BuildContext context) {
    _context = context;
  }

  void onInit() {
    _logger.i('onInit called', tag: logTag);
  }

  void onReady() {
    _logger.i('onReady called', tag: logTag);
  }

  void onClose() {
    _logger.i('onClose called', tag: logTag);
  }

  @override
  void dispose() {
    onClose();
    super.dispose();
  }

  Future<void> runAsync(String operationName, Future<void> Function() action) async {
    _logger.d('Starting async operation: $operationName', tag: logTag);
    try {
      await action();
    } catch (e, stackTrace) {
      if (!mounted) {
        _logger.w('Error in $operationName after disposal: $e', tag: logTag);
        return;
      }
      _logger.e('Error in async $operationName', error: e, stackTrace: stackTrace, tag: logTag);
      rethrow;
    }
  }
}
"#;

pub const STATE: &str = r#"class {{pascalName}}State {
  final int counter;

  const {{pascalName}}State({
    this.counter = 0,
  });

  {{pascalName}}State copyWith({
    int? counter,
  }) {
    return {{pascalName}}State(
      counter: counter ?? this.counter,
    );
  }
}
"#;

pub const NOTIFIER: &str = r#"import '../../../core/base/base_state_notifier.dart';
import '../../../data/datasource/network/service/{{featureName}}_service.dart';
import '{{featureName}}_state.dart';

class {{pascalName}}Notifier extends BaseStateNotifier<{{pascalName}}State> {
  {{pascalName}}Notifier(super.initialState, super.ref);

  final {{pascalName}}Service {{camelName}}Service = {{pascalName}}Service();

  void incrementCounter() {
    state = state.copyWith(counter: state.counter + 1);
  }
}
"#;

pub const PROVIDER: &str = r#"import 'package:flutter_riverpod/flutter_riverpod.dart';
import '{{featureName}}_state.dart';
import '{{featureName}}_notifier.dart';

final {{camelName}}Provider = StateNotifierProvider.autoDispose<{{pascalName}}Notifier, {{pascalName}}State>(
  (ref) => {{pascalName}}Notifier(const {{pascalName}}State(), ref),
);
"#;

pub const PAGE: &str = r#"import 'package:flutter/material.dart';
import 'package:flutter_riverpod/flutter_riverpod.dart';
import '{{featureName}}_provider.dart';

class {{pascalName}}Page extends ConsumerWidget {
  const {{pascalName}}Page({super.key});

  @override
  Widget build(BuildContext context, WidgetRef ref) {
    final state = ref.watch({{camelName}}Provider);
    final notifier = ref.read({{camelName}}Provider.notifier);

    return Scaffold(
      appBar: AppBar(title: const Text('{{pascalName}}')),
      body: Center(
        child: Column(
          mainAxisAlignment: MainAxisAlignment.center,
          children: [
            Text('Counter: ${state.counter}'),
            const SizedBox(height: 20),
            ElevatedButton(
              onPressed: notifier.incrementCounter,
              child: const Text('Increment'),
            ),
          ],
        ),
      ),
    );
  }
}
"#;
